pub(crate) use super::*;

#[test]
fn test_from_vec() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-6);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-6);
}

#[test]
fn test_from_vec_error() {
    let result = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn test_zeros() {
    let m = Matrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_set() {
    let mut m = Matrix::zeros(2, 2);
    m.set(1, 0, 7.5);
    assert!((m.get(1, 0) - 7.5).abs() < 1e-6);
    assert!((m.get(0, 1) - 0.0).abs() < 1e-6);
}

#[test]
fn test_row_and_column() {
    let m = Matrix::from_vec(2, 3, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions");
    assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
    assert_eq!(m.column(1), vec![2.0, 5.0]);
}

#[test]
fn test_rows_iterator() {
    let m = Matrix::from_vec(3, 2, vec![1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions");
    let collected: Vec<&[f32]> = m.rows().collect();
    assert_eq!(collected.len(), 3);
    assert_eq!(collected[1], &[3.0, 4.0]);
}

#[test]
fn test_row_vector() {
    let m = Matrix::row_vector(&[1.0, 2.0, 3.0]);
    assert_eq!(m.shape(), (1, 3));
    assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
}
