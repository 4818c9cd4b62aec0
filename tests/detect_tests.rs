// tests/detect_tests.rs
use framefind_core::{CutPreset, Dimension, Rect, PROFILES};
use framefind_cv::{DetectionConfig, ScreenLocator};
use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Desktop-like screenshot: random non-white content with a
/// near-white one-pixel frame around the viewport area.
fn synthetic_screenshot(width: u32, height: u32, frame: Option<Rect>) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(99);
    let mut image = RgbImage::from_fn(width, height, |_, _| {
        // keep at least one high nibble off-white
        Rgb([rng.gen_range(0..0xe0), rng.gen(), rng.gen()])
    });
    if let Some(frame) = frame {
        for i in 0..frame.width {
            image.put_pixel(frame.x + i, frame.y, Rgb([0xff, 0xfe, 0xf8]));
            image.put_pixel(frame.x + i, frame.y + frame.height - 1, Rgb([0xff, 0xfe, 0xf8]));
        }
        for i in 0..frame.height {
            image.put_pixel(frame.x, frame.y + i, Rgb([0xff, 0xfe, 0xf8]));
            image.put_pixel(frame.x + frame.width - 1, frame.y + i, Rgb([0xff, 0xfe, 0xf8]));
        }
    }
    image
}

#[test]
fn detects_viewport_in_desktop_screenshot() {
    let image = synthetic_screenshot(1920, 1080, Some(Rect::new(100, 50, 602, 362)));
    let result = ScreenLocator::default().detect_image(&image).unwrap();
    assert_eq!(result.viewport, Some(Rect::new(101, 51, 600, 360)));
    assert_eq!(result.profile.unwrap().size, Dimension::new(600, 360));
}

#[test]
fn reports_absence_on_plain_desktop() {
    let image = synthetic_screenshot(1024, 768, None);
    let result = ScreenLocator::default().detect_image(&image).unwrap();
    assert!(result.viewport.is_none());
    assert!(result.profile.is_none());
}

#[test]
fn detects_every_catalog_profile() {
    for profile in PROFILES {
        let frame = Rect::new(13, 7, profile.width() + 2, profile.height() + 2);
        let image = synthetic_screenshot(
            profile.width() + 120,
            profile.height() + 90,
            Some(frame),
        );
        let result = ScreenLocator::default().detect_image(&image).unwrap();
        assert_eq!(
            result.viewport,
            Some(Rect::new(14, 8, profile.width(), profile.height())),
            "profile {}x{}",
            profile.width(),
            profile.height()
        );
    }
}

#[test]
fn custom_profile_catalog() {
    let config = DetectionConfig {
        profiles: vec![PROFILES[0]],
        ..DetectionConfig::default()
    };
    let image = synthetic_screenshot(1300, 800, Some(Rect::new(40, 30, 722, 434)));
    // the 720x432 frame is invisible to a catalog holding only 600x360
    let result = ScreenLocator::new(config).detect_image(&image).unwrap();
    assert!(result.viewport.is_none());
}

#[test]
fn preset_region_fits_detected_viewport() {
    let image = synthetic_screenshot(1920, 1080, Some(Rect::new(100, 50, 602, 362)));
    let viewport = ScreenLocator::default()
        .detect_image(&image)
        .unwrap()
        .viewport
        .unwrap();
    let region = CutPreset::Unit.region_for(viewport.size());
    assert!(region.x + region.width <= viewport.width);
    assert!(region.y + region.height <= viewport.height);
}
