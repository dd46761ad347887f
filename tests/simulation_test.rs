use ossim::disk::{self, Cylinder, Direction, SchedulingPolicy};
use ossim::error::SimulationError;
use ossim::paging::{self, PageId, PagingPolicy};
use ossim::report;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashSet, VecDeque};

const TEXTBOOK_REFS: [PageId; 8] = [7, 0, 1, 2, 0, 3, 0, 4];
const TEXTBOOK_QUEUE: [Cylinder; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

fn path_length(start: Cylinder, sequence: &[Cylinder]) -> u64 {
    let mut current = start;
    let mut total = 0;
    for &next in sequence {
        total += u64::from(current.abs_diff(next));
        current = next;
    }
    total
}

fn random_refs(rng: &mut StdRng, len: usize, max_page: PageId) -> Vec<PageId> {
    (0..len).map(|_| rng.gen_range(0..=max_page)).collect()
}

#[test]
fn test_fifo_textbook_sequence() {
    let outcome = paging::simulate(3, &TEXTBOOK_REFS, PagingPolicy::Fifo).unwrap();

    // Only the first re-reference of 0 finds it resident
    assert_eq!(outcome.faults, 7);
    assert_eq!(outcome.hits, 1);
    let hits: Vec<bool> = outcome.trace.iter().map(|r| r.hit).collect();
    assert_eq!(
        hits,
        vec![false, false, false, false, true, false, false, false]
    );
}

#[test]
fn test_second_chance_diverges_from_fifo() {
    let fifo = paging::simulate(3, &TEXTBOOK_REFS, PagingPolicy::Fifo).unwrap();
    let clock = paging::simulate(3, &TEXTBOOK_REFS, PagingPolicy::SecondChance).unwrap();

    assert_eq!(clock.faults, 6);
    assert_eq!(clock.hits, 2);
    assert_ne!(fifo.faults, clock.faults);
}

#[test]
fn test_scan_textbook_path() {
    let outcome = disk::simulate(
        &TEXTBOOK_QUEUE,
        53,
        200,
        Direction::Increasing,
        SchedulingPolicy::Scan,
    )
    .unwrap();

    assert_eq!(
        outcome.path(),
        vec![53, 65, 67, 98, 122, 124, 183, 199, 37, 14]
    );
    assert_eq!(outcome.seek_distance, path_length(53, &outcome.sequence));
    assert_eq!(outcome.seek_distance, 331);
}

#[test]
fn test_look_textbook_path() {
    let scan = disk::simulate(
        &TEXTBOOK_QUEUE,
        53,
        200,
        Direction::Increasing,
        SchedulingPolicy::Scan,
    )
    .unwrap();
    let look = disk::simulate(
        &TEXTBOOK_QUEUE,
        53,
        200,
        Direction::Increasing,
        SchedulingPolicy::Look,
    )
    .unwrap();

    assert_eq!(look.sequence, vec![65, 67, 98, 122, 124, 183, 37, 14]);
    assert!(!look.sequence.contains(&199));
    assert!(!look.sequence.contains(&0));
    assert_eq!(look.seek_distance, 299);
    assert!(look.seek_distance < scan.seek_distance);
}

#[test]
fn test_request_at_head_served_first_for_free() {
    for policy in [SchedulingPolicy::Scan, SchedulingPolicy::Look] {
        for direction in [Direction::Increasing, Direction::Decreasing] {
            let outcome = disk::simulate(&[70, 50, 20], 50, 100, direction, policy).unwrap();
            let position = outcome.sequence.iter().position(|&c| c == 50).unwrap();
            assert_eq!(outcome.sequence.iter().filter(|&&c| c == 50).count(), 1);
            match direction {
                Direction::Increasing => assert_eq!(position, 0),
                // Decreasing services it on the way back up, before 70
                Direction::Decreasing => assert_eq!(outcome.sequence[position + 1], 70),
            }
            assert_eq!(outcome.seek_distance, path_length(50, &outcome.sequence));
        }
    }

    let outcome = disk::simulate(&[50], 50, 100, Direction::Increasing, SchedulingPolicy::Look)
        .unwrap();
    assert_eq!(outcome.sequence, vec![50]);
    assert_eq!(outcome.seek_distance, 0);
}

#[test]
fn test_invalid_parameters_rejected() {
    assert!(matches!(
        paging::simulate(0, &TEXTBOOK_REFS, PagingPolicy::SecondChance),
        Err(SimulationError::InvalidParameter { .. })
    ));
    assert!(matches!(
        disk::simulate(&[1], 5, 5, Direction::Increasing, SchedulingPolicy::Scan),
        Err(SimulationError::InvalidParameter { .. })
    ));
    assert!(matches!(
        disk::simulate(&[200], 5, 200, Direction::Increasing, SchedulingPolicy::Look),
        Err(SimulationError::InvalidParameter { .. })
    ));
}

#[test]
fn test_paging_counts_and_uniqueness() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let frame_count = rng.gen_range(1..=6);
        let len = rng.gen_range(0..60);
        let refs = random_refs(&mut rng, len, 9);
        for policy in [PagingPolicy::Fifo, PagingPolicy::SecondChance] {
            let outcome = paging::simulate(frame_count, &refs, policy).unwrap();
            assert_eq!(outcome.hits + outcome.faults, refs.len());
            assert_eq!(outcome.trace.len(), refs.len());

            for record in &outcome.trace {
                assert_eq!(record.frames.len(), frame_count);
                let resident: Vec<PageId> = record.frames.iter().flatten().copied().collect();
                let unique: HashSet<PageId> = resident.iter().copied().collect();
                assert_eq!(unique.len(), resident.len());
                assert!(resident.contains(&record.page));
            }
        }
    }
}

#[test]
fn test_fifo_matches_arrival_order_model() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let frame_count = rng.gen_range(1..=5);
        let len = rng.gen_range(1..50);
        let refs = random_refs(&mut rng, len, 8);
        let outcome = paging::simulate(frame_count, &refs, PagingPolicy::Fifo).unwrap();

        let mut model: VecDeque<PageId> = VecDeque::new();
        for (page, record) in refs.iter().zip(&outcome.trace) {
            let mut expected_victim = None;
            if !model.contains(page) {
                if model.len() == frame_count {
                    expected_victim = model.pop_front();
                }
                model.push_back(*page);
            }
            assert_eq!(record.evicted, expected_victim);

            let mut resident: Vec<PageId> = record.frames.iter().flatten().copied().collect();
            let mut expected: Vec<PageId> = model.iter().copied().collect();
            resident.sort_unstable();
            expected.sort_unstable();
            assert_eq!(resident, expected);
        }
    }
}

#[test]
fn test_second_chance_spares_referenced_pages() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let frame_count = rng.gen_range(1..=5);
        let len = rng.gen_range(1..50);
        let refs = random_refs(&mut rng, len, 8);
        let outcome = paging::simulate(frame_count, &refs, PagingPolicy::SecondChance).unwrap();

        for pair in outcome.trace.windows(2) {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(victim) = after.evicted else {
                continue;
            };
            let slot = before.frames.iter().position(|&p| p == Some(victim)).unwrap();
            let bits = before.reference_bits.as_ref().unwrap();
            // A set bit can only be evicted after a full pass cleared every bit
            if bits[slot] {
                assert!(bits.iter().all(|&b| b));
            }
            assert_eq!(after.frames[slot], Some(after.page));
            assert!(after.reference_bits.as_ref().unwrap()[slot]);
        }
    }
}

#[test]
fn test_scan_adds_exactly_one_boundary_visit() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..300 {
        let disk_size: Cylinder = rng.gen_range(2..300);
        let head = rng.gen_range(0..disk_size);
        let count = rng.gen_range(1..20);
        let requests: Vec<Cylinder> = (0..count).map(|_| rng.gen_range(0..disk_size)).collect();
        let direction = if rng.gen_bool(0.5) {
            Direction::Increasing
        } else {
            Direction::Decreasing
        };
        let edge = match direction {
            Direction::Increasing => disk_size - 1,
            Direction::Decreasing => 0,
        };

        let scan = disk::simulate(&requests, head, disk_size, direction, SchedulingPolicy::Scan)
            .unwrap();
        let look = disk::simulate(&requests, head, disk_size, direction, SchedulingPolicy::Look)
            .unwrap();

        assert_eq!(scan.seek_distance, path_length(head, &scan.sequence));
        assert_eq!(look.seek_distance, path_length(head, &look.sequence));
        assert!(scan.seek_distance >= look.seek_distance);

        if head != edge && !requests.contains(&edge) {
            assert_eq!(scan.sequence.len(), look.sequence.len() + 1);
            let without_edge: Vec<Cylinder> =
                scan.sequence.iter().copied().filter(|&c| c != edge).collect();
            assert_eq!(without_edge, look.sequence);
        } else {
            assert_eq!(scan.sequence, look.sequence);
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = paging::simulate(3, &TEXTBOOK_REFS, PagingPolicy::SecondChance).unwrap();
    let second = paging::simulate(3, &TEXTBOOK_REFS, PagingPolicy::SecondChance).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        report::paging_json(&first).unwrap(),
        report::paging_json(&second).unwrap()
    );

    let first = disk::simulate(&TEXTBOOK_QUEUE, 53, 200, Direction::Decreasing, SchedulingPolicy::Scan)
        .unwrap();
    let second = disk::simulate(&TEXTBOOK_QUEUE, 53, 200, Direction::Decreasing, SchedulingPolicy::Scan)
        .unwrap();
    assert_eq!(first, second);
}
