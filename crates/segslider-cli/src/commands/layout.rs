use anyhow::Result;

use segslider_core::{slider::INTRINSIC_HEIGHT, AppConfig, MarkKind, SegmentedSlider};

pub fn run(config: &AppConfig, viewport: f64, json: bool) -> Result<()> {
    let mut slider = SegmentedSlider::from_config(&config.slider);
    let geometry = slider.set_bounds(viewport, INTRINSIC_HEIGHT);

    if json {
        println!("{}", geometry.to_json()?);
        return Ok(());
    }

    let tile = &geometry.tile;
    let replication = &tile.replication;

    println!("Tile layout ({:?}, viewport {:.1}):\n", tile.variant, viewport);
    println!("  Unit width:        {:.2}", tile.unit_width);
    println!("  Spacing:           {:.2}", tile.spacing);
    println!("  Line width:        {:.2}", tile.line_width);
    println!("  Segment height:    {:.2}", tile.segment_height);
    println!("  Separator height:  {:.2}", tile.height);
    println!("  Canvas height:     {:.2}", tile.canvas_height);
    println!("  Content width:     {:.2}", tile.content_width);
    println!();
    println!(
        "  Replication: {} section + 2 x {} edge copies, step {:.2}, origin {:.2}",
        replication.section_instances,
        replication.edge_instances,
        replication.step,
        replication.origin_x
    );
    println!(
        "  Scroll: insets {:.2}/{:.2}, offset {:.2}, progress {:.3}",
        geometry.scroll.inset_left, geometry.scroll.inset_right, geometry.offset, geometry.progress
    );
    println!();

    println!("  Marks:");
    for mark in tile.marks() {
        let kind = match mark.kind {
            MarkKind::Boundary => "boundary",
            MarkKind::Segment => "segment",
        };
        println!(
            "    {:<8}  x {:>7.2}  y {:>6.2}  {:.2} x {:.2}  opacity {:.2}",
            kind,
            mark.x,
            mark.y,
            mark.width,
            mark.height,
            mark.kind.opacity()
        );
    }

    Ok(())
}
