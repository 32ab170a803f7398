//! End-to-end runs over relation files: fixtures are written to a temporary
//! directory, loaded, combined, saved and reloaded.

use relalg::{
    cross_product, equi_join, projection, selection, Comparison, EquiJoinOperation, Error,
    JoinStrategy, OperatorError, Relation, Result, StorageConfig, StorageError,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, values: &[i32]) -> PathBuf {
    let path = dir.path().join(name);
    let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes().to_vec()).collect();
    fs::write(&path, bytes).unwrap();
    path
}

fn rows<const N: usize>(count: i32, row: impl Fn(i32) -> [i32; N]) -> Vec<i32> {
    (0..count).flat_map(|i| row(i).to_vec()).collect()
}

fn reload<const N: usize>(path: &Path, relation: &Relation<N>) -> Result<Relation<N>> {
    relation.save(path)?;
    Ok(Relation::load(path)?)
}

#[test]
fn worst_case_join_matches_cross_product() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    // last attribute of the left input and first of the right are all 5s
    let left = write_fixture(&dir, "left", &rows(20, |i| [i, i * 2, i * 3, -i, 5]));
    let right = write_fixture(&dir, "right", &rows(15, |i| [5, i, i + 100]));
    let left = Relation::<5>::load(left)?;
    let right = Relation::<3>::load(right)?;

    for &strategy in &[JoinStrategy::NestedLoop, JoinStrategy::Hash] {
        let joined: Relation<8> = EquiJoinOperation::new([4], [0])
            .with_strategy(strategy)
            .execute(&left, &right)?;
        assert_eq!(joined.tuple_count(), left.tuple_count() * right.tuple_count());
        assert_eq!(joined, cross_product(&left, &right));
        assert_eq!(reload(&dir.path().join("joined"), &joined)?, joined);
    }
    Ok(())
}

#[test]
fn join_on_disjoint_values_is_empty() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let left = write_fixture(&dir, "left", &rows(10, |i| [i, 1, 2, 3]));
    let right = write_fixture(&dir, "right", &rows(10, |i| [i + 1000, 4, 5, 6]));
    let left = Relation::<4>::load(left)?;
    let right = Relation::<4>::load(right)?;

    let joined: Relation<8> = equi_join(&left, &right, [0], [0])?;
    assert_eq!(joined.tuple_count(), 0);

    let path = dir.path().join("joined");
    joined.save(&path)?;
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    Ok(())
}

#[test]
fn cross_product_cardinality() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let left = write_fixture(&dir, "left", &rows(12, |i| [i, i, i]));
    let right = write_fixture(&dir, "right", &rows(7, |i| [i % 2, i, 0]));
    let left = Relation::<3>::load(left)?;
    let right = Relation::<3>::load(right)?;

    let product: Relation<6> = cross_product(&left, &right);
    assert_eq!(product.tuple_count(), 12 * 7);
    assert_eq!(reload(&dir.path().join("product"), &product)?, product);
    Ok(())
}

#[test]
fn selection_keeps_half_of_fixture() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        &dir,
        "input",
        &rows(40, |i| [if i % 2 == 0 { 100 } else { 200 }, i, -i]),
    );
    let input = Relation::<3>::load(input)?;

    let selected = selection(&input, 0, Comparison::Equal, 100)?;
    assert_eq!(selected.tuple_count(), input.tuple_count() / 2);
    assert!(selected.iter().all(|tuple| tuple[0] == 100));
    Ok(())
}

#[test]
fn projection_drops_a_column() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "input", &rows(30, |i| [i % 10, i, i % 10 + 1]));
    let input = Relation::<3>::load(input)?;

    let projected = projection(&input, [0, 2])?;
    assert_eq!(projected.tuple_count(), 10);
    assert_eq!(projected.iter().next(), Some(&[0, 1]));
    Ok(())
}

#[test]
fn load_collapses_repeated_tuples() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "dup", &[1, 2, 3, 1, 2, 3]);
    let relation = Relation::<3>::load(path)?;
    assert_eq!(relation.tuple_count(), 1);
    Ok(())
}

#[test]
fn round_trip_with_config() -> Result<()> {
    let dir = tempfile::tempdir().unwrap();
    let relation: Relation<4> = (0..50).map(|i| [i % 3, -i, i * i, i32::MAX - i]).collect();
    let config = StorageConfig::default().with_parent_dirs(true);
    let path = dir.path().join("nested").join("relation");
    config.save(&path, &relation)?;
    assert_eq!(config.load::<_, 4>(&path)?, relation);
    Ok(())
}

#[test]
fn errors_surface_through_crate_error() {
    let dir = tempfile::tempdir().unwrap();
    let input: Relation<2> = vec![[1, 2]].into_iter().collect();

    let run = || -> Result<Relation<2>> {
        let selected = selection(&input, 2, Comparison::Equal, 0)?;
        Ok(selected)
    };
    match run() {
        Err(Error::Operator(OperatorError::InvalidAttributeIndex { index, arity })) => {
            assert_eq!((index, arity), (2, 2))
        }
        other => panic!("unexpected {:?}", other),
    }

    let missing = dir.path().join("missing");
    match Relation::<2>::load(&missing).map_err(Error::from) {
        Err(Error::Storage(StorageError::Open { path, .. })) => assert_eq!(path, missing),
        other => panic!("unexpected {:?}", other),
    }
}
