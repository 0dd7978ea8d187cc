use comm::{Endpoint, Group};
use workloads::matvec::{matvec_rows, matvec_sequential};

#[test]
fn distributed_product_matches_sequential() {
    const N: usize = 12;
    let expected = matvec_sequential(N);

    for np in [1, 2, 3, 4] {
        let group = Group::new(np).unwrap();
        let results = group.launch(|mut ep: Endpoint<f64>| matvec_rows(&mut ep, N).unwrap());
        for (rank, v) in results.iter().enumerate() {
            assert_eq!(v, &expected, "np={np} rank={rank}");
        }
    }
}

#[test]
fn uneven_row_counts_are_supported() {
    // 10 rows over 4 ranks: blocks of 3, 3, 2, 2
    const N: usize = 10;
    let expected = matvec_sequential(N);

    let group = Group::new(4).unwrap();
    let results = group.launch(|mut ep: Endpoint<f64>| matvec_rows(&mut ep, N).unwrap());
    for v in results {
        assert_eq!(v, expected);
    }
}
