use comm::{Endpoint, Group, ROOT_RANK};
use workloads::ring::ring_relay;

#[test]
fn origin_counts_one_increment_per_other_rank() {
    for np in 1..=8 {
        let group = Group::new(np).unwrap();
        let results =
            group.launch(|mut ep: Endpoint<u64>| ring_relay(&mut ep, ROOT_RANK).unwrap());

        assert_eq!(results[0], Some(np as u64 - 1), "np={np}");
        for (rank, result) in results.iter().enumerate().skip(1) {
            assert_eq!(result, &None, "rank {rank} is not the origin");
        }
    }
}

#[test]
fn any_rank_can_be_the_origin() {
    let group = Group::new(5).unwrap();
    let results = group.launch(|mut ep: Endpoint<u64>| ring_relay(&mut ep, 3).unwrap());
    assert_eq!(results[3], Some(4));
    assert_eq!(results.iter().filter(|r| r.is_some()).count(), 1);
}
