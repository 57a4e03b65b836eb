use chrono::{Datelike, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use gnsstime::{
    date_to_mjd, gpscal, leap_seconds, mjd_to_date, CalendarArgs, CalendarQuery, GnssError,
    GnssTime, GpsDays, ModifiedJulianDate,
};
use qtty::{Days, Seconds};

#[test]
fn reference_instant_properties() {
    let t = GnssTime::new(2011, 1, 1).unwrap();
    assert_eq!(t.isoformat(), "2011-01-01T00:00:00");
    assert_eq!(t.gpscal(CalendarArgs::new()).unwrap(), (1, 1616, 6));
    assert_eq!(t.mjd(), 55_562.0);
    assert_eq!(t.leapsec(), -15);
    assert_eq!(t.gpst().isoformat(), "2011-01-01T00:00:15");
}

#[test]
fn gpscal_forms_agree() {
    let t = GnssTime::new(2011, 1, 1).unwrap();
    let date = NaiveDate::from_ymd_opt(2013, 12, 31).unwrap();
    let answers = [
        gpscal((2013, 12, 31)).unwrap(),
        gpscal("2013/12/31").unwrap(),
        gpscal(CalendarQuery::Mjd(56_657.0)).unwrap(),
        gpscal(date).unwrap(),
        t.gpscal((2013, 12, 31)).unwrap(),
        t.gpscal(CalendarArgs::new().ymd("2013/12/31")).unwrap(),
        t.gpscal(CalendarArgs::new().date(date)).unwrap(),
        t.gpscal(CalendarArgs::new().year(2013).month(12).day(31)).unwrap(),
        t.gpscal(CalendarArgs::new().mjd(56_657.0)).unwrap(),
    ];
    for cal in answers {
        assert_eq!(cal, (365, 1773, 2));
    }
}

#[test]
fn ymd_keyword_wins_over_field_keywords() {
    let t = GnssTime::new(2011, 1, 1).unwrap();
    let args = CalendarArgs::new()
        .ymd("2013/12/31")
        .year(2000)
        .month(6)
        .day(15);
    assert_eq!(t.gpscal(args).unwrap(), (365, 1773, 2));
}

#[test]
fn duration_arithmetic_keeps_gnss_type() {
    let t = GnssTime::new(2011, 1, 1).unwrap();
    let later: GnssTime = t + Duration::days(2);
    assert_eq!(later.isoformat(), "2011-01-03T00:00:00");
    assert_eq!(later.gpscal(CalendarArgs::new()).unwrap(), (3, 1617, 1));
    assert_eq!(later.leapsec(), -15);

    let earlier: GnssTime = t - Duration::days(2);
    assert_eq!(earlier.isoformat(), "2010-12-30T00:00:00");
    assert_eq!(later - earlier, Duration::days(4));
    assert!(earlier < t && t < later);
}

#[test]
fn calendar_roundtrip_at_midnight() {
    let mut date = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2040, 1, 1).unwrap();
    let mut previous = f64::NEG_INFINITY;
    while date < end {
        let year = date.year() as i64;
        let mjd = date_to_mjd(year, date.month(), date.day(), NaiveTime::MIN).unwrap();
        assert!(mjd > previous);
        assert_eq!(mjd_to_date(mjd).unwrap(), date.and_time(NaiveTime::MIN));
        previous = mjd;
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn from_mjd_is_idempotent_on_microsecond_multiples() {
    for mjd in [0.0, 44_244.0, 55_562.5, 56_657.125, 60_000.0 + 1.0 / 1024.0] {
        assert_eq!(GnssTime::from_mjd(mjd).unwrap().mjd(), mjd);
    }
}

#[test]
fn gps_week_cycles_every_seven_days() {
    let mut t = GnssTime::from_ymd_hms(1979, 12, 20, 13, 30, 0).unwrap();
    for _ in 0..40 {
        let next = t + Duration::days(7);
        assert_eq!(next.gpswd(), t.gpswd());
        assert_eq!(next.gpsw(), t.gpsw() + 1);
        assert!(t.gpswd() <= 6);
        t = t + Duration::days(1);
    }
}

#[test]
fn leap_offset_grows_and_matches_gpst() {
    let mut t = GnssTime::new(1979, 1, 1).unwrap();
    let end = GnssTime::new(2024, 1, 1).unwrap();
    let mut magnitude = 0;
    while t < end {
        let leap = t.leapsec();
        assert!(leap <= 0);
        assert!(leap.abs() >= magnitude);
        magnitude = leap.abs();
        assert_eq!(t.gpst() - t, Duration::seconds(-leap as i64));
        assert_eq!(leap_seconds(&t.naive_utc()), leap);
        t = t + Duration::days(30);
    }
    assert_eq!(magnitude, 18);
}

#[test]
fn timezone_aware_instants_normalize_to_utc() {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let new_york_evening = offset.with_ymd_and_hms(2013, 12, 31, 21, 0, 0).unwrap();
    let t = GnssTime::from(new_york_evening);
    assert_eq!(t.naive_utc().date(), NaiveDate::from_ymd_opt(2014, 1, 1).unwrap());
    assert_eq!(t.gpscal(CalendarArgs::new()).unwrap(), (1, 1773, 3));
    assert_eq!(t.mjd(), 56_658.0 + 2.0 / 24.0);
    assert_eq!(t.gpst().isoformat(), "2013-12-31T21:00:16-05:00");
}

#[test]
fn day_counters_agree_with_instant() {
    let t = GnssTime::new(2011, 1, 1).unwrap();
    let mjd: ModifiedJulianDate = t.modified_julian_date();
    let gps: GpsDays = mjd.into();
    assert_eq!(gps.week(), t.gpsw());
    assert_eq!(gps.week_day(), t.gpswd());
    assert_eq!(GnssTime::from_time(gps + Days::new(2.0)).unwrap(), t + Duration::days(2));
}

#[test]
fn invalid_inputs_are_reported() {
    assert!(matches!(GnssTime::new(2011, 13, 1), Err(GnssError::InvalidDate { .. })));
    assert!(matches!(GnssTime::new(2011, 2, 29), Err(GnssError::InvalidDate { .. })));
    assert!(matches!(gpscal("31.12"), Err(GnssError::Parse { .. })));
    assert!(matches!(gpscal("2013/12/32"), Err(GnssError::InvalidDate { .. })));
    assert!(matches!(GnssTime::from_mjd(f64::NAN), Err(GnssError::NonFiniteMjd(_))));
    assert_eq!(gpscal((i64::MAX / 100, 1, 1)), Err(GnssError::OutOfRange));
    assert_eq!(
        GnssTime::from_gps_tow(1773, Seconds::new(604_800.0), 0),
        Err(GnssError::InvalidTimeOfWeek(604_800.0))
    );
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_iso_text_and_plain_numbers() {
    let t = GnssTime::from_ymd_hms(2011, 1, 1, 0, 0, 15).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, "\"2011-01-01T00:00:15\"");
    let back: GnssTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);

    let cal = serde_json::to_value(t.gps_calendar()).unwrap();
    assert_eq!(cal["gpsw"], 1616);

    let mjd = serde_json::to_string(&t.modified_julian_date()).unwrap();
    assert!(mjd.starts_with("55562.0001"));
}
