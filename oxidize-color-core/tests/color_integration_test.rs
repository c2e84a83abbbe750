//! Integration tests for the public color API
//!
//! Exercises the documented reference values end to end through the
//! crate root re-exports.

use oxidize_color::{Color, ColorError, DeviceColor, Result};
use std::collections::HashMap;

#[test]
fn test_reference_values() -> Result<()> {
    assert_eq!(Color::rgb(0, 0, 0)?.darker(), Color::rgb(0, 0, 0)?);
    assert_eq!(Color::rgb(0, 0, 0)?.brighter(), Color::rgb(3, 3, 3)?);
    assert_eq!(Color::rgb(100, 100, 100)?.darker(), Color::rgb(70, 70, 70)?);
    assert_eq!(Color::rgb(10, 20, 30)?, Color::rgba(10, 20, 30, 255)?);
    assert_eq!(Color::rgba_f32(1.0, 0.0, 0.0, 1.0)?, Color::rgba(255, 0, 0, 255)?);

    let white = Color::rgb(255, 255, 255)?.brighter();
    assert_eq!((white.red(), white.green(), white.blue()), (255, 255, 255));

    let packed = Color::from_argb(0xFF00_00FF);
    assert_eq!(
        (packed.red(), packed.green(), packed.blue(), packed.alpha()),
        (0, 0, 255, 255)
    );
    Ok(())
}

#[test]
fn test_boundaries() {
    for value in [0, 255] {
        assert!(Color::rgba(value, value, value, value).is_ok());
    }
    for value in [-1, 256] {
        assert!(matches!(
            Color::rgb(value, 0, 0),
            Err(ColorError::ChannelOutOfRange { .. })
        ));
    }
}

#[test]
fn test_colors_as_map_keys() -> Result<()> {
    let mut usage: HashMap<Color, usize> = HashMap::new();
    *usage.entry(Color::ORANGE).or_default() += 1;
    *usage.entry(Color::rgb(255, 200, 0)?).or_default() += 1;
    *usage.entry("#FFC800".parse()?).or_default() += 1;
    *usage.entry(Color::BLUE).or_default() += 1;

    assert_eq!(usage.len(), 2);
    assert_eq!(usage[&Color::ORANGE], 3);
    Ok(())
}

#[test]
fn test_repeated_darkening_reaches_black() {
    let mut color = Color::WHITE;
    for _ in 0..32 {
        color = color.darker();
    }
    assert_eq!(color, Color::BLACK);
}

#[test]
fn test_repeated_brightening_reaches_white() {
    let mut color = Color::BLACK;
    for _ in 0..32 {
        color = color.brighter();
    }
    assert_eq!(color, Color::WHITE);
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || Color::GRAY.darker().argb() + i))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Color::GRAY.darker().argb() + i as u32);
    }
}

#[test]
fn test_translucent_fill() -> Result<()> {
    let color: Color = "0,128,255,128".parse()?;
    assert_eq!(color.to_device(), DeviceColor::rgb(0.0, 128.0 / 255.0, 1.0));
    assert_eq!(color.to_device().fill_operator(), "0.000 0.502 1.000 rg");
    assert!((color.opacity() - 128.0 / 255.0).abs() < 1e-12);
    Ok(())
}
