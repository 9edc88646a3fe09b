use tslib::*;

fn fields(dt: &DateTime) -> (i32, u8, u8, u8, u8, u8, u32) {
    (
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        dt.nanosecond(),
    )
}

fn zones() -> Vec<TimeZone> {
    ["UTC", "+05:30", "-11:00", "Europe/London", "Australia/Sydney"]
        .iter()
        .map(|name| name.parse().unwrap())
        .collect()
}

#[test]
fn strip_aware_utc() {
    let utc = DateTime::from_unix_nanos(1_704_110_400_000_000_000, Some(TimeZone::utc())).unwrap();
    assert!(utc.is_aware());

    let naive = localize_datetime(&utc, None).unwrap();
    assert!(naive.is_naive());
    assert_eq!(naive, DateTime::new(2024, 1, 1, 12, 0, 0, 0).unwrap());
}

#[test]
fn strip_keeps_wall_fields() {
    let naive = DateTime::new(2021, 6, 30, 8, 15, 42, 999).unwrap();
    for tz in zones() {
        let aware = localize_datetime(&naive, Some(&tz)).unwrap();
        let stripped = localize_datetime(&aware, None).unwrap();
        assert!(stripped.is_naive());
        assert_eq!(fields(&stripped), fields(&aware));
    }

    // stripping a naive value is a no-op
    assert_eq!(localize_datetime(&naive, None), Ok(naive));
}

#[test]
fn attach_keeps_wall_fields() {
    let naive = DateTime::new(2021, 6, 30, 8, 15, 42, 999).unwrap();
    for tz in zones() {
        let aware = localize_datetime(&naive, Some(&tz)).unwrap();
        assert!(aware.is_aware());
        assert_eq!(aware.tz(), Some(&tz));
        assert_eq!(fields(&aware), fields(&naive));
    }
}

#[test]
fn input_is_not_mutated() {
    let naive = DateTime::new(2021, 6, 30, 8, 15, 42, 999).unwrap();
    let copy = naive;
    let tz: TimeZone = "Asia/Kolkata".parse().unwrap();
    let _ = localize_datetime(&naive, Some(&tz)).unwrap();
    assert_eq!(naive, copy);
    assert!(naive.is_naive());
}

#[test]
fn convert_preserves_instant() {
    let paris: TimeZone = "Europe/Paris".parse().unwrap();
    let tokyo: TimeZone = "Asia/Tokyo".parse().unwrap();

    let naive = DateTime::new(2024, 7, 14, 22, 0, 0, 0).unwrap();
    let in_paris = localize_datetime(&naive, Some(&paris)).unwrap();
    let in_tokyo = localize_datetime(&in_paris, Some(&tokyo)).unwrap();

    assert_eq!(in_tokyo.unix_nanos(), in_paris.unix_nanos());
    assert_eq!(in_tokyo.to_string(), "2024-07-15T05:00:00.000000000+09:00");
}

#[test]
fn replace_preserves_wall_fields() {
    let options = LocalizeOptions::builder()
        .aware(AwarePolicy::Replace)
        .build();
    let paris: TimeZone = "Europe/Paris".parse().unwrap();
    let tokyo: TimeZone = "Asia/Tokyo".parse().unwrap();

    let naive = DateTime::new(2024, 7, 14, 22, 0, 0, 0).unwrap();
    let in_paris = options.localize(&naive, Some(&paris)).unwrap();
    let in_tokyo = options.localize(&in_paris, Some(&tokyo)).unwrap();

    assert_eq!(fields(&in_tokyo), fields(&naive));
    assert_eq!(in_tokyo.tz(), Some(&tokyo));
}

#[test]
fn out_of_range_offset() {
    let naive = DateTime::new(2024, 1, 1, 0, 0, 0, 0).unwrap();
    let tz = TimeZone::Fixed(time::UtcOffset::from_hms(24, 0, 0).unwrap());
    assert!(matches!(
        localize_datetime(&naive, Some(&tz)),
        Err(Error::InvalidTimezone(_))
    ));
    assert!(matches!(
        "+99:00".parse::<TimeZone>(),
        Err(Error::InvalidTimezone(_))
    ));
}

#[test]
fn deterministic() {
    let naive = DateTime::new(2024, 3, 31, 1, 30, 0, 0).unwrap();
    for tz in zones() {
        assert_eq!(
            localize_datetime(&naive, Some(&tz)),
            localize_datetime(&naive, Some(&tz))
        );
    }
}

#[test]
fn representation_tags() {
    assert_eq!(DT64NS_DTYPE.to_string(), "datetime64[ns]");
    assert_eq!(TD64NS_DTYPE.to_string(), "timedelta64[ns]");
    assert_eq!(DT64NS_DTYPE.unit(), NANOSECOND);
    assert_eq!(DT64NS_DTYPE.kind(), Kind::Datetime);
    assert_eq!(TD64NS_DTYPE.kind(), Kind::Timedelta);

    let threads: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| (DT64NS_DTYPE, TD64NS_DTYPE)))
        .collect();
    for thread in threads {
        assert_eq!(thread.join().unwrap(), (DT64NS_DTYPE, TD64NS_DTYPE));
    }
}
