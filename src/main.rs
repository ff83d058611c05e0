//! Landing widgets demo (for testing purposes only)
//! The real interface is the WASM bindings.

use landing_widgets::compute_slides;

fn main() {
    println!("Landing Widgets");
    println!("===============");
    println!();
    println!("This is a library crate. To use it:");
    println!();
    println!("  1. Build WASM: wasm-pack build --target web");
    println!("  2. Call mountLandingWidgets() once the page has loaded");
    println!();

    let container = 480.0;
    let heights = [140.0, 90.0, 260.0, 120.0, 120.0, 300.0, 80.0];
    println!("Pagination of {:?} into a {}px container:", heights, container);
    for (index, slide) in compute_slides(&heights, container).iter().enumerate() {
        let total: f32 = heights[slide.steps.clone()].iter().sum();
        println!("  slide {}: steps {:?} ({}px)", index, slide.steps, total);
    }
}
