use chrono::{Duration, Utc};
use gnsstime::{gpscal, CalendarArgs, GnssTime};

fn main() -> gnsstime::Result<()> {
    let now = GnssTime::from(Utc::now());
    let t = GnssTime::new(2011, 1, 1)?;

    println!("now     : {now}  (doy, gpsw, gpswd) = {}", now.gps_calendar());
    println!("date    : {t}");
    println!("doy     : {}", t.doy());
    println!("gpsw    : {}", t.gpsw());
    println!("gpswd   : {}", t.gpswd());
    println!("gpst    : {}", t.gpst());
    println!("leapsec : {}", t.leapsec());
    println!("mjd     : {}", t.mjd());
    println!("gpscal(2013, 12, 31)      -> {}", gpscal((2013, 12, 31))?);
    println!("gpscal(ymd = 2013/12/31)  -> {}", t.gpscal(CalendarArgs::new().ymd("2013/12/31"))?);
    println!("t + 2 days                -> {}", t + Duration::days(2));
    Ok(())
}
