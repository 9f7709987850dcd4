use dictpw_password::{strength::title_case, CrackTimes, StrengthEstimator, Zxcvbn};

struct Fixed;

impl StrengthEstimator for Fixed {
    fn crack_times(&self, _password: &str) -> CrackTimes {
        let mut times = CrackTimes::default();
        times.insert("online_throttling_100_per_hour", "centuries");
        times.insert("offline_fast_hashing_1e10_per_second", "3 days");
        times
    }
}

#[test]
fn estimator_behind_trait_object() {
    let estimators: Vec<Box<dyn StrengthEstimator>> =
        vec![Box::new(Fixed), Box::new(Zxcvbn::default())];
    for estimator in estimators {
        let times = estimator.crack_times("Gr@pe7Mango");
        assert!(times.get("online_throttling_100_per_hour").is_some());
        assert!(times.get("offline_fast_hashing_1e10_per_second").is_some());
    }
}

#[test]
fn report_layout() {
    let report = Fixed.crack_times("ignored").to_string();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        vec![
            "Crack times:",
            "Online Throttling 100 Per Hour       : Centuries",
            "Offline Fast Hashing 1E10 Per Second : 3 Days",
        ],
        lines
    );
}

#[test]
fn zxcvbn_user_inputs() {
    let plain = Zxcvbn::default().crack_times("mangopeach1987");
    let personal = Zxcvbn::with_user_inputs(vec!["mangopeach".to_owned()])
        .crack_times("mangopeach1987");
    assert_eq!(plain.len(), personal.len());
    assert_eq!(
        Some("Less Than A Second"),
        personal
            .get("offline_fast_hashing_1e10_per_second")
            .map(title_case)
            .as_deref()
    );
}
