// tests/unit_tests.rs
use spectral_scan::grid::{BandGrid, Grid};
use spectral_scan::processing::classify::{
    built_up_mask, hotspot_mask, normalize_by_max, vegetation_mask, water_mask,
};
use spectral_scan::processing::indices::{normalized_difference, IndexCalculator, SpectralIndex, NDI};
use spectral_scan::io::Band;

/// Helper function to build a band grid, repeating `values` to fill the shape
fn create_band(width: usize, height: usize, values: &[f32]) -> BandGrid {
    let data = (0..width * height).map(|i| values[i % values.len()]).collect();
    Grid::new((width, height), data)
}

/// Test NDI calculation with known values
#[test]
fn test_ndi_calculation() {
    let test_cases = [
        // A, B, Expected NDI
        (5000.0, 2500.0, 0.33333), // (5000-2500)/(5000+2500)
        (3000.0, 3000.0, 0.0),
        (1000.0, 4000.0, -0.6),
        (0.25, 0.75, -0.5),
    ];

    let a_values: Vec<f32> = test_cases.iter().map(|(a, _, _)| *a).collect();
    let b_values: Vec<f32> = test_cases.iter().map(|(_, b, _)| *b).collect();
    let band_a = create_band(2, 2, &a_values);
    let band_b = create_band(2, 2, &b_values);

    let result = NDI::new(0, 1, None).calculate(&[&band_a, &band_b]);

    assert_eq!(result.shape(), (2, 2));
    for (i, (a, b, expected)) in test_cases.iter().enumerate() {
        let value = result.data()[i];
        assert!((value - expected).abs() < 0.0001,
            "Expected {}, got {} at index {}", expected, value, i);
        assert_eq!(value, (a - b) / (a + b));
    }
}

/// A zero sum yields NaN instead of a fault or a fill value
#[test]
fn test_ndi_zero_sum_is_undefined() {
    let band_a = create_band(2, 2, &[0.0, 5.0, -3.0, 1.0]);
    let band_b = create_band(2, 2, &[0.0, -5.0, 3.0, 1.0]);

    let result = normalized_difference(&band_a, &band_b);
    let values = result.data();

    assert!(values[0].is_nan());
    assert!(values[1].is_nan());
    assert!(values[2].is_nan());
    assert_eq!(values[3], 0.0);
    assert!(values.iter().all(|v| !v.is_infinite()));
}

/// Non-negative inputs stay in [-1, 1]
#[test]
fn test_ndi_range_for_non_negative_inputs() {
    let band_a = create_band(4, 4, &[0.0, 1.0, 17.0, 300.0, 9999.0, 0.5, 42.0]);
    let band_b = create_band(4, 4, &[3.0, 0.0, 17.0, 1.0, 250.0, 0.0, 7.0, 1e-3]);

    let result = normalized_difference(&band_a, &band_b);
    for v in result.data() {
        assert!((-1.0..=1.0).contains(v), "{} out of range", v);
    }
}

/// Negative inputs are not clamped
#[test]
fn test_ndi_negative_inputs_leave_range() {
    let band_a = create_band(1, 1, &[3.0]);
    let band_b = create_band(1, 1, &[-1.0]);

    let result = normalized_difference(&band_a, &band_b);
    assert_eq!(result.data()[0], 2.0);
}

#[test]
fn test_ndi_antisymmetry() {
    let band_a = create_band(3, 2, &[120.0, 0.0, 45.5, 800.0, 3.0, 0.0]);
    let band_b = create_band(3, 2, &[30.0, 60.0, 45.5, 0.1, 9.0, 0.0]);

    let ab = normalized_difference(&band_a, &band_b);
    let ba = normalized_difference(&band_b, &band_a);

    for (x, y) in ab.data().iter().zip(ba.data()) {
        if x.is_nan() {
            assert!(y.is_nan());
        } else {
            assert_eq!(*x, -*y);
        }
    }
}

#[test]
fn test_ndi_of_band_with_itself() {
    let band = create_band(2, 2, &[12.0, -4.0, 0.0, 0.001]);

    let result = normalized_difference(&band, &band);
    assert_eq!(result.data()[0], 0.0);
    assert_eq!(result.data()[1], 0.0);
    assert!(result.data()[2].is_nan());
    assert_eq!(result.data()[3], 0.0);
}

#[test]
#[should_panic]
fn test_ndi_rejects_mismatched_shapes() {
    let band_a = create_band(2, 2, &[1.0]);
    let band_b = create_band(4, 1, &[1.0]);
    let _ = normalized_difference(&band_a, &band_b);
}

/// Band pairings of the three named indices
#[test]
fn test_spectral_index_bands() {
    assert_eq!(SpectralIndex::Vegetation.bands(), (Band::Nir, Band::Red));
    assert_eq!(SpectralIndex::Water.bands(), (Band::Green, Band::Nir));
    assert_eq!(SpectralIndex::BuiltUp.bands(), (Band::Swir, Band::Nir));

    let ndvi = SpectralIndex::Vegetation.calculator();
    assert_eq!(ndvi.name(), "NDVI");
    assert_eq!(ndvi.required_bands(), 2);

    let nir = create_band(1, 1, &[0.5]);
    let red = create_band(1, 1, &[0.1]);
    let value = SpectralIndex::Vegetation.compute(&nir, &red).data()[0];
    assert!((value - 0.6666667).abs() < 1e-6);
}

/// Test that custom names are properly set
#[test]
fn test_custom_index_names() {
    let custom_name = "Custom NDI Name";
    let ndi = NDI::new(0, 1, Some(custom_name.to_string()));
    assert_eq!(ndi.name(), custom_name);
    assert_eq!(NDI::new(0, 1, None).name(), "NDI");
}

#[test]
fn test_vegetation_mask_threshold() {
    let ndvi = create_band(5, 1, &[0.41, 0.4, -0.9, f32::NAN, 0.95]);
    let mask = vegetation_mask(&ndvi);
    assert_eq!(mask.data(), &[true, false, false, false, true]);
}

#[test]
fn test_water_mask_threshold() {
    let ndwi = create_band(4, 1, &[0.2, 0.21, f32::NAN, -0.5]);
    let mask = water_mask(&ndwi);
    assert_eq!(mask.data(), &[false, true, false, false]);
}

/// One pixel per combination of the two built-up conditions
#[test]
fn test_built_up_mask_combinations() {
    // (ndbi > 0.2, ndvi < 0.2): (T, T), (T, F), (F, T), (F, F)
    let ndbi = create_band(2, 2, &[0.5, 0.5, 0.1, 0.1]);
    let ndvi = create_band(2, 2, &[0.0, 0.6, 0.0, 0.6]);

    let mask = built_up_mask(&ndbi, &ndvi);
    assert_eq!(mask.data(), &[true, false, false, false]);
}

#[test]
fn test_built_up_mask_undefined_pixels() {
    let ndbi = create_band(2, 1, &[f32::NAN, 0.5]);
    let ndvi = create_band(2, 1, &[0.0, f32::NAN]);

    let mask = built_up_mask(&ndbi, &ndvi);
    assert_eq!(mask.data(), &[false, false]);
}

#[test]
fn test_hotspot_mask() {
    let red = create_band(2, 1, &[10.0, 100.0]);
    let nir = create_band(2, 1, &[80.0, 5.0]);

    assert_eq!(normalize_by_max(&red).data(), &[0.1, 1.0]);
    assert_eq!(normalize_by_max(&nir).data(), &[1.0, 0.0625]);

    let mask = hotspot_mask(&red, &nir);
    assert_eq!(mask.data(), &[false, true]);
}

/// The maximum ignores NaN cells
#[test]
fn test_normalize_ignores_undefined_cells() {
    let band = create_band(3, 1, &[f32::NAN, 2.0, 8.0]);
    let normalized = normalize_by_max(&band);

    assert!(normalized.data()[0].is_nan());
    assert_eq!(&normalized.data()[1..], &[0.25, 1.0]);
}

/// A zero maximum makes the whole band undefined and the mask empty
#[test]
fn test_hotspot_zero_maximum() {
    let red = create_band(2, 2, &[0.0]);
    let nir = create_band(2, 2, &[0.0, -4.0, 0.0, -1.0]);

    assert!(normalize_by_max(&red).data().iter().all(|v| v.is_nan()));
    assert!(normalize_by_max(&nir).data().iter().all(|v| v.is_nan()));

    let mask = hotspot_mask(&red, &nir);
    assert_eq!(mask.count_true(), 0);
}

#[test]
fn test_hotspot_all_undefined_band() {
    let red = create_band(2, 1, &[f32::NAN]);
    let nir = create_band(2, 1, &[0.0, 1.0]);

    let mask = hotspot_mask(&red, &nir);
    assert_eq!(mask.data(), &[false, false]);
}
