//! Tests for preprocessing module.

use super::*;

#[test]
fn test_new() {
    let scaler = StandardScaler::new();
    assert!(!scaler.is_fitted());
    assert!(scaler.mean().is_none());
    assert!(scaler.n_features().is_none());
}

#[test]
fn test_default() {
    let scaler = StandardScaler::default();
    assert!(!scaler.is_fitted());
}

#[test]
fn test_fit_basic() {
    let data = Matrix::from_vec(3, 2, vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0])
        .expect("valid matrix dimensions");

    let mut scaler = StandardScaler::new();
    scaler
        .fit(&data)
        .expect("fit should succeed with valid data");

    assert!(scaler.is_fitted());
    assert_eq!(scaler.n_features(), Some(2));

    // Mean should be [2.0, 20.0]
    let mean = scaler.mean().expect("fitted");
    assert!((mean[0] - 2.0).abs() < 1e-6);
    assert!((mean[1] - 20.0).abs() < 1e-6);

    // Std should be sqrt(2/3) ≈ 0.8165
    let std = scaler.std().expect("fitted");
    let expected_std = (2.0_f32 / 3.0).sqrt();
    assert!((std[0] - expected_std).abs() < 1e-4);
    assert!((std[1] - expected_std * 10.0).abs() < 1e-3);
}

#[test]
fn test_transform_basic() {
    let data = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("valid matrix dimensions");

    let mut scaler = StandardScaler::new();
    let transformed = scaler
        .fit_transform(&data)
        .expect("fit_transform should succeed");

    let mean: f32 = (0..3).map(|i| transformed.get(i, 0)).sum::<f32>() / 3.0;
    assert!(mean.abs() < 1e-6, "Mean should be ~0, got {mean}");

    let variance: f32 = (0..3)
        .map(|i| {
            let v = transformed.get(i, 0);
            v * v
        })
        .sum::<f32>()
        / 3.0;
    assert!(
        (variance.sqrt() - 1.0).abs() < 1e-5,
        "Std should be ~1, got {}",
        variance.sqrt()
    );
}

#[test]
fn test_transform_query_uses_fitted_stats() {
    let train = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("valid matrix dimensions");
    let query = Matrix::row_vector(&[4.0]);

    let mut scaler = StandardScaler::new();
    scaler.fit(&train).expect("fit should succeed");

    let transformed = scaler.transform(&query).expect("transform should succeed");

    // mean=2, std=sqrt(2/3)
    let expected = (4.0 - 2.0) / (2.0_f32 / 3.0).sqrt();
    assert!((transformed.get(0, 0) - expected).abs() < 1e-5);
}

#[test]
fn test_refit_replaces_statistics() {
    let first = Matrix::from_vec(2, 1, vec![0.0, 10.0]).expect("valid matrix dimensions");
    let second = Matrix::from_vec(2, 1, vec![100.0, 200.0]).expect("valid matrix dimensions");

    let mut scaler = StandardScaler::new();
    scaler.fit(&first).expect("fit should succeed");
    scaler.fit(&second).expect("fit should succeed");

    let mean = scaler.mean().expect("fitted");
    assert!((mean[0] - 150.0).abs() < 1e-4);
}

#[test]
fn test_constant_feature_is_zeroed() {
    let data = Matrix::from_vec(3, 2, vec![1.0, 0.1, 2.0, 0.1, 3.0, 0.1])
        .expect("valid matrix dimensions");

    let mut scaler = StandardScaler::new();
    let transformed = scaler
        .fit_transform(&data)
        .expect("fit_transform should succeed");

    assert_eq!(scaler.std().expect("fitted")[1], 0.0);
    for i in 0..3 {
        assert_eq!(transformed.get(i, 1), 0.0);
        assert!(transformed.get(i, 0).is_finite());
    }
}

#[test]
fn test_constant_feature_query_stays_finite() {
    let data = Matrix::from_vec(2, 1, vec![5.0, 5.0]).expect("valid matrix dimensions");
    let mut scaler = StandardScaler::new();
    scaler.fit(&data).expect("fit should succeed");

    let transformed = scaler
        .transform(&Matrix::row_vector(&[8.0]))
        .expect("transform should succeed");
    assert!((transformed.get(0, 0) - 3.0).abs() < 1e-6);
}

#[test]
fn test_single_sample() {
    let data = Matrix::from_vec(1, 2, vec![5.0, 10.0]).expect("valid matrix dimensions");

    let mut scaler = StandardScaler::new();
    let transformed = scaler
        .fit_transform(&data)
        .expect("fit should succeed with single sample");

    assert_eq!(scaler.std().expect("fitted"), &[0.0, 0.0]);
    assert_eq!(transformed.row(0), &[0.0, 0.0]);
}

#[test]
fn test_empty_data_error() {
    let data = Matrix::from_vec(0, 2, vec![]).expect("empty matrix should be valid");
    let mut scaler = StandardScaler::new();
    assert_eq!(scaler.fit(&data).unwrap_err(), NutrirecError::EmptyData);
}

#[test]
fn test_transform_not_fitted_error() {
    let data = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]).expect("valid matrix dimensions");
    let scaler = StandardScaler::new();
    assert_eq!(
        scaler.transform(&data).unwrap_err(),
        NutrirecError::NotFitted("StandardScaler")
    );
}

#[test]
fn test_dimension_mismatch_error() {
    let train = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("valid matrix dimensions");
    let test = Matrix::from_vec(3, 3, vec![1.0; 9]).expect("valid matrix dimensions");

    let mut scaler = StandardScaler::new();
    scaler.fit(&train).expect("fit should succeed");

    assert!(matches!(
        scaler.transform(&test),
        Err(NutrirecError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_fit_rejects_nan() {
    let data = Matrix::from_vec(3, 2, vec![1.0, 10.0, f32::NAN, 20.0, 3.0, 30.0])
        .expect("valid matrix dimensions");

    let mut scaler = StandardScaler::new();
    let err = scaler.fit(&data).unwrap_err();
    assert!(matches!(err, NutrirecError::NonFinite { .. }));
    assert!(err.to_string().contains("row 1, column 0"), "{err}");
    assert!(!scaler.is_fitted());
}

#[test]
fn test_fit_rejects_infinity() {
    let data = Matrix::from_vec(2, 1, vec![f32::INFINITY, 1.0]).expect("valid matrix dimensions");
    let mut scaler = StandardScaler::new();
    assert!(matches!(
        scaler.fit(&data),
        Err(NutrirecError::NonFinite { .. })
    ));
}

#[test]
fn test_fit_large_column_keeps_precision() {
    // 2499 and 2501 alternate: mean 2500, population std 1
    let n = 500_000;
    let data: Vec<f32> = (0..n)
        .map(|i| if i % 2 == 0 { 2499.0 } else { 2501.0 })
        .collect();
    let x = Matrix::from_vec(n, 1, data).expect("valid matrix dimensions");

    let mut scaler = StandardScaler::new();
    scaler.fit(&x).expect("fit should succeed");

    let mean = scaler.mean().expect("fitted")[0];
    let std = scaler.std().expect("fitted")[0];
    assert!((mean - 2500.0).abs() < 1e-3, "mean {mean}");
    assert!((std - 1.0).abs() < 1e-4, "std {std}");
}
