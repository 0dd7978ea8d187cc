use comm::{
    hypercube_broadcast, hypercube_reduce, CommError, Endpoint, Group, Hypercube, ROOT_RANK,
};

#[test]
fn broadcast_reaches_every_rank() {
    for dimension in 0..=4 {
        let cube = Hypercube::new(dimension);
        let group = Group::hypercube(&cube, cube.world_size()).unwrap();
        let tokens = group.launch(|mut ep: Endpoint<u64>| {
            hypercube_broadcast(&mut ep, &cube, ROOT_RANK, vec![42]).unwrap()[0]
        });
        assert_eq!(tokens, vec![42; cube.world_size()], "dimension={dimension}");
    }
}

#[test]
fn broadcast_works_from_any_origin() {
    let cube = Hypercube::new(3);
    let group = Group::hypercube(&cube, 8).unwrap();
    let tokens = group.launch(|mut ep: Endpoint<u64>| {
        // only the origin's payload matters
        let data = vec![100 + ep.world_rank() as u64];
        hypercube_broadcast(&mut ep, &cube, 5, data).unwrap()[0]
    });
    assert_eq!(tokens, vec![105; 8]);
}

#[test]
fn reduce_folds_every_contribution_to_the_origin() {
    let cube = Hypercube::new(3);
    let group = Group::hypercube(&cube, 8).unwrap();
    let sums = group.launch(|mut ep: Endpoint<u64>| {
        let contribution = vec![ep.world_rank() as u64];
        hypercube_reduce(&mut ep, &cube, 2, contribution, |a, b| a + b).unwrap()
    });

    // 0 + 1 + ... + 7
    assert_eq!(sums[2], Some(vec![28]));
    for (rank, sum) in sums.iter().enumerate() {
        if rank != 2 {
            assert_eq!(sum, &None);
        }
    }
}

#[test]
fn broadcast_then_reduce_round_trip() {
    let cube = Hypercube::new(2);
    let group = Group::hypercube(&cube, 4).unwrap();
    let results = group.launch(|mut ep: Endpoint<u64>| {
        let token = hypercube_broadcast(&mut ep, &cube, ROOT_RANK, vec![7]).unwrap()[0];
        // every rank acknowledges one copy of the token
        hypercube_reduce(&mut ep, &cube, ROOT_RANK, vec![token], |a, b| a + b).unwrap()
    });
    assert_eq!(results[0], Some(vec![28]));
}

#[test]
fn mismatched_group_fails_before_any_exchange() {
    let cube = Hypercube::new(3);
    assert_eq!(
        Group::hypercube(&cube, 6).unwrap_err(),
        CommError::NotPowerOfTwo { world_size: 6 }
    );
    assert_eq!(
        Group::hypercube(&cube, 4).unwrap_err(),
        CommError::GroupSizeMismatch {
            dimension: 3,
            expected: 8,
            actual: 4,
        }
    );
}

#[test]
fn exchange_rejects_a_group_of_the_wrong_shape() {
    // a valid group that does not match the cube handed to the exchange
    let group = Group::new(3).unwrap();
    let errors = group.launch(|mut ep: Endpoint<u64>| {
        hypercube_broadcast(&mut ep, &Hypercube::new(2), ROOT_RANK, vec![1]).unwrap_err()
    });
    for err in errors {
        assert_eq!(err, CommError::NotPowerOfTwo { world_size: 3 });
    }
}
