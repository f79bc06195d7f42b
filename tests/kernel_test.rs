// Fog Grid Kernel - Free and Open Source Software Statement
//
// This project, foggrid, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/kernel_test.rs
// Version: 1.0.0
//
// This file contains tests for the range-scan kernel: the fixed scenarios hosts
// rely on, randomized range properties, workload equivalence, the sanity check
// and the exported entry points.
//
// Tree Location:
// - tests/kernel_test.rs (kernel tests)
// - Depends on: foggrid, rand

#[cfg(test)]
mod tests {
    use foggrid::core::scan::{NOT_FOUND, in_range, scan, scan_counted, scan_with};
    use foggrid::core::types::{ScanOutcome, ScanRequest};
    use foggrid::core::workload::{DEFAULT_MIX_ROUNDS, Workload, WorkloadParseError, mix_burn};
    use foggrid::core::sanity::add;
    use foggrid::ffi;
    use rand::Rng;

    #[test]
    fn test_scan_scenarios() {
        assert_eq!(scan(0, 10, 5), 5, "Target inside range should be found");
        assert_eq!(scan(0, 10, 15), NOT_FOUND, "Target past the end should not be found");
        assert_eq!(scan(5, 5, 5), NOT_FOUND, "Empty range should run zero iterations");
        assert_eq!(scan(10, 0, 5), NOT_FOUND, "Inverted range should run zero iterations");
    }

    #[test]
    fn test_scan_bounds_are_half_open() {
        assert_eq!(scan(0, 10, 0), 0, "Start is inclusive");
        assert_eq!(scan(0, 10, 9), 9, "Last candidate is end - 1");
        assert_eq!(scan(0, 10, 10), NOT_FOUND, "End is exclusive");
        assert_eq!(scan(-20, -10, -15), -15, "Negative ranges scan normally");
    }

    #[test]
    fn test_scan_random_ranges() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let start: i32 = rng.gen_range(-2_000..2_000);
            let end: i32 = rng.gen_range(-2_000..2_000);
            let target: i32 = rng.gen_range(-2_500..2_500);

            let result = scan_with(start, end, target, &Workload::Idle);
            if start <= target && target < end {
                assert_eq!(result, target, "scan({}, {}, {}) should find target", start, end, target);
            } else {
                assert_eq!(result, NOT_FOUND, "scan({}, {}, {}) should miss", start, end, target);
            }
            assert_eq!(in_range(start, end, target), start <= target && target < end);
        }
    }

    #[test]
    fn test_scan_is_idempotent() {
        let first = scan(-50, 50, 7);
        for _ in 0..10 {
            assert_eq!(scan(-50, 50, 7), first, "Repeated scans should agree");
        }
    }

    #[test]
    fn test_scan_at_i32_extremes() {
        assert_eq!(scan_with(i32::MAX - 3, i32::MAX, i32::MAX - 1, &Workload::Idle), i32::MAX - 1);
        assert_eq!(scan_with(i32::MAX - 3, i32::MAX, i32::MAX, &Workload::Idle), NOT_FOUND);
        assert_eq!(scan_with(i32::MIN, i32::MIN + 3, i32::MIN, &Workload::Idle), i32::MIN);
    }

    #[test]
    fn test_sentinel_target_collides() {
        // A hit on -1 looks exactly like a miss in the integer convention
        assert_eq!(scan(-5, 5, -1), -1);
        assert_eq!(scan(0, 5, -1), -1);

        let (hit, visited) = scan_counted(-5, 5, -1, &Workload::Idle);
        assert_eq!(hit, Some(-1), "Counted scan keeps the hit distinguishable");
        assert_eq!(visited, 5, "Candidates -5..=-1 should be visited");

        let (miss, visited) = scan_counted(0, 5, -1, &Workload::Idle);
        assert_eq!(miss, None);
        assert_eq!(visited, 5);
    }

    #[test]
    fn test_workloads_do_not_change_results() {
        let workloads = [
            Workload::Trig,
            Workload::Mix { rounds: 50 },
            Workload::Idle,
        ];
        for workload in workloads.iter() {
            assert_eq!(scan_with(0, 100, 42, workload), 42, "{} should find 42", workload);
            assert_eq!(scan_with(0, 100, 420, workload), NOT_FOUND, "{} should miss 420", workload);
            assert_eq!(scan_with(100, 0, 42, workload), NOT_FOUND, "{} inverted range", workload);
        }
    }

    #[test]
    fn test_counted_scan_stops_at_target() {
        let (hit, visited) = scan_counted(10, 1_000, 19, &Workload::Idle);
        assert_eq!(hit, Some(19));
        assert_eq!(visited, 10, "Scan should stop right after the hit");

        let (_, visited) = scan_counted(10, 0, 5, &Workload::Idle);
        assert_eq!(visited, 0, "Inverted range visits nothing");
    }

    #[test]
    fn test_mix_burn_is_deterministic() {
        assert_eq!(mix_burn(1234, 1_000), mix_burn(1234, 1_000));
        assert_eq!(mix_burn(0, 0), 0, "Zero rounds leaves the hash untouched");
        // pin 0: each round is h = (h * 33) ^ r, so round 0 gives 0 and round 1 gives 1
        assert_eq!(mix_burn(0, 2), 1);
        assert!(mix_burn(42, DEFAULT_MIX_ROUNDS) >= 0, "Non-negative PINs stay non-negative");
    }

    #[test]
    fn test_add() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-7, 7), 0);
        assert_eq!(add(i32::MAX, 1), i32::MIN, "Overflow should wrap");
        assert_eq!(add(i32::MIN, -1), i32::MAX, "Underflow should wrap");
    }

    #[test]
    fn test_ffi_exports() {
        assert_eq!(ffi::add(2, 3), 5);
        assert_eq!(ffi::scan(0, 10, 5), 5);
        assert_eq!(ffi::scan(0, 10, 15), -1);
        assert_eq!(ffi::test_connection(2, 3), ffi::add(2, 3), "Legacy add alias");
        assert_eq!(ffi::crack_password(0, 10, 5), ffi::scan(0, 10, 5), "Legacy scan alias");
        assert_eq!(ffi::crack_password(10, 0, 5), -1);
    }

    #[test]
    fn test_workload_parsing() {
        assert_eq!("trig".parse::<Workload>(), Ok(Workload::Trig));
        assert_eq!("IDLE".parse::<Workload>(), Ok(Workload::Idle));
        assert_eq!("none".parse::<Workload>(), Ok(Workload::Idle));
        assert_eq!("mix".parse::<Workload>(), Ok(Workload::Mix { rounds: DEFAULT_MIX_ROUNDS }));
        assert_eq!("mix:2000".parse::<Workload>(), Ok(Workload::Mix { rounds: 2000 }));
        assert!(matches!(
            "mix:lots".parse::<Workload>(),
            Err(WorkloadParseError::InvalidRounds { .. })
        ));
        assert!(matches!(
            "sha256".parse::<Workload>(),
            Err(WorkloadParseError::UnknownWorkload { .. })
        ));

        assert_eq!(Workload::mix().to_string(), "mix");
        assert_eq!(Workload::Mix { rounds: 7 }.to_string(), "mix:7");
        assert_eq!(Workload::default(), Workload::Trig);
    }

    #[test]
    fn test_scan_request_helpers() {
        let request = ScanRequest::new(0, 10, 5);
        assert_eq!(request.workload, Workload::Trig);
        assert_eq!(request.len(), 10);
        assert_eq!(request.expected_outcome(), ScanOutcome::Found(5));

        let inverted = ScanRequest::new(10, 0, 5);
        assert!(inverted.is_empty());
        assert_eq!(inverted.expected_outcome(), ScanOutcome::NotFound);

        let full = ScanRequest::new(i32::MIN, i32::MAX, 0);
        assert_eq!(full.len(), u32::MAX as u64, "Length must not overflow");

        assert!(ScanRequest::new(0, 10, -1).target_is_sentinel());
    }

    #[test]
    fn test_scan_outcome_sentinel_form() {
        assert_eq!(ScanOutcome::Found(5).to_sentinel(), 5);
        assert_eq!(ScanOutcome::Found(-1).to_sentinel(), -1);
        assert_eq!(ScanOutcome::NotFound.to_sentinel(), NOT_FOUND);
        assert_eq!(ScanOutcome::Aborted.to_sentinel(), NOT_FOUND);
        assert!(ScanOutcome::Found(-1).is_found());
        assert!(!ScanOutcome::Aborted.is_found());
    }

    #[test]
    fn test_scan_request_json() {
        let request: ScanRequest =
            serde_json::from_str(r#"{"start":0,"end":10000,"target":4242}"#).unwrap();
        assert_eq!(request, ScanRequest::new(0, 10_000, 4242), "Workload defaults to trig");

        let request: ScanRequest =
            serde_json::from_str(r#"{"start":0,"end":10,"target":3,"workload":"mix:10"}"#).unwrap();
        assert_eq!(request.workload, Workload::Mix { rounds: 10 });

        let bad = serde_json::from_str::<ScanRequest>(r#"{"start":0,"end":10,"target":3,"workload":"md5"}"#);
        assert!(bad.is_err(), "Unknown workload should be rejected");

        let outcome = serde_json::to_string(&ScanOutcome::Found(7)).unwrap();
        assert_eq!(outcome, r#"{"status":"found","value":7}"#);
        let outcome = serde_json::to_string(&ScanOutcome::NotFound).unwrap();
        assert_eq!(outcome, r#"{"status":"not_found"}"#);
    }
}
