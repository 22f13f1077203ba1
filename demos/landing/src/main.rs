//! Native preview of the backdrop layer.
//!
//! The entrance animations need a document to animate, so this demo only
//! runs the shape field: handy for tuning colours and motion without a
//! browser in the loop.

use drift_ngin::{
    app,
    backdrop::BackdropLayer,
    layer::{Layer, LayerConstructor},
};

fn main() -> anyhow::Result<()> {
    let backdrop: LayerConstructor = Box::new(|init| {
        Box::pin(async move { Box::new(BackdropLayer::new(init).await) as Box<dyn Layer> })
    });

    app::run(vec![backdrop])
}
