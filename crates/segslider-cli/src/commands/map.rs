use anyhow::{anyhow, Result};

use segslider_core::{slider::INTRINSIC_HEIGHT, AppConfig, SegmentedSlider};

pub fn run(
    config: &AppConfig,
    viewport: f64,
    value: Option<f64>,
    offset: Option<f64>,
) -> Result<()> {
    let mut slider = SegmentedSlider::from_config(&config.slider);
    slider.set_bounds(viewport, INTRINSIC_HEIGHT);

    match (value, offset) {
        (Some(value), _) => {
            slider.set_value(value);
            println!(
                "value {:.4} -> offset {:.4} (progress {:.4})",
                slider.value(),
                slider.offset(),
                slider.progress()
            );
        }
        (None, Some(offset)) => {
            slider.scroll_to(offset);
            println!(
                "offset {:.4} -> value {:.4} (progress {:.4})",
                slider.offset(),
                slider.value(),
                slider.progress()
            );
            for event in slider.take_events() {
                println!("  {}", event.name());
            }
        }
        (None, None) => return Err(anyhow!("Either --value or --offset is required")),
    }

    Ok(())
}
