use comm::{Endpoint, Group};
use workloads::life::{population, random_grid, run_distributed, step_sequential};

const WIDTH: usize = 8;
const HEIGHT: usize = 8;

fn glider() -> Vec<u8> {
    let mut grid = vec![0u8; WIDTH * HEIGHT];
    for (i, j) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
        grid[i * WIDTH + j] = 1;
    }
    grid
}

fn sequential_after(grid: &[u8], generations: usize) -> Vec<u8> {
    let mut cells = grid.to_vec();
    for _ in 0..generations {
        cells = step_sequential(WIDTH, &cells);
    }
    cells
}

#[test]
fn distributed_steps_match_the_sequential_stepper() {
    let grid = glider();
    let expected = sequential_after(&grid, 4);

    for np in [1, 2, 4] {
        let group = Group::new(np).unwrap();
        let results = group.launch(|mut ep: Endpoint<u8>| {
            let input = ep.is_root().then(|| grid.clone());
            run_distributed(&mut ep, WIDTH, input, 4).unwrap()
        });
        assert_eq!(results[0].as_ref().unwrap(), &expected, "np={np}");
        assert!(results[1..].iter().all(|r| r.is_none()));
    }
}

#[test]
fn a_glider_keeps_its_population() {
    let grid = glider();
    assert_eq!(population(&grid), 5);
    // the glider period is 4; population is 5 at every full period
    assert_eq!(population(&sequential_after(&grid, 4)), 5);
    assert_eq!(population(&sequential_after(&grid, 8)), 5);
}

#[test]
fn random_grids_evolve_identically_for_any_group_size() {
    let grid = random_grid(10, 6, 99);
    let mut expected = grid.clone();
    for _ in 0..3 {
        expected = step_sequential(10, &expected);
    }

    for np in [2, 3] {
        let group = Group::new(np).unwrap();
        let results = group.launch(|mut ep: Endpoint<u8>| {
            let input = ep.is_root().then(|| grid.clone());
            run_distributed(&mut ep, 10, input, 3).unwrap()
        });
        assert_eq!(results[0].as_ref().unwrap(), &expected, "np={np}");
    }
}
