//! WASM bindings for expanding declaration blocks in the browser.

use wasm_bindgen::prelude::*;

use crate::block::expand_block;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Expand the shorthands in a declaration block.
///
/// Takes `property: value; ...` text and returns one longhand declaration
/// per line. Declarations that fail to parse are left out.
#[wasm_bindgen(js_name = expandShorthands)]
pub fn expand_shorthands(block: &str) -> String {
    expand_block(block)
}
