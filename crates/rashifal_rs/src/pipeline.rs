//! End-to-end computation: location -> local day -> sky -> calendar -> text.

use chrono::{DateTime, Utc};
use rashifal_content::synthesize_all;
use rashifal_ephem::EphemerisProvider;
use rashifal_time::LocalInstant;
use rashifal_vedic::derive_calendar;
use tracing::info;

use crate::error::HoroscopeError;
use crate::geo::{GeoResolver, resolve_location};
use crate::location::Location;
use crate::result::HoroscopeResult;

/// Compute the horoscope for a known location at `now`.
///
/// Fails only if the ephemeris cannot deliver both longitudes.
pub fn compute_horoscope<P: EphemerisProvider + ?Sized>(
    location: Location,
    provider: &P,
    now: DateTime<Utc>,
) -> Result<HoroscopeResult, HoroscopeError> {
    let instant = LocalInstant::resolve(&location.time_zone, now);
    let sample = rashifal_ephem::sample(provider, instant.utc())?;
    let calendar = derive_calendar(&sample);
    let date_key = instant.date_key();
    let signs = synthesize_all(&date_key, &location.city, &calendar);

    info!(
        date = %date_key,
        city = %location.city,
        zone = instant.zone_name(),
        tithi = calendar.tithi,
        nakshatra = calendar.nakshatra.name(),
        engine = provider.source(),
        "horoscope computed"
    );

    Ok(HoroscopeResult::assemble(
        &instant,
        location,
        sample.rounded(),
        calendar,
        signs,
        provider.source(),
        now,
    ))
}

/// Geolocate `ip`, then compute. Geolocation failure uses the default location.
pub async fn horoscope_for_ip<R, P>(
    resolver: &R,
    provider: &P,
    ip: &str,
    now: DateTime<Utc>,
) -> Result<HoroscopeResult, HoroscopeError>
where
    R: GeoResolver + ?Sized,
    P: EphemerisProvider + ?Sized,
{
    horoscope_for_ip_with_defaults(resolver, provider, ip, &Location::default(), now).await
}

/// [`horoscope_for_ip`] with a caller-supplied fallback location.
pub async fn horoscope_for_ip_with_defaults<R, P>(
    resolver: &R,
    provider: &P,
    ip: &str,
    defaults: &Location,
    now: DateTime<Utc>,
) -> Result<HoroscopeResult, HoroscopeError>
where
    R: GeoResolver + ?Sized,
    P: EphemerisProvider + ?Sized,
{
    let location = resolve_location(resolver, ip, defaults).await;
    compute_horoscope(location, provider, now)
}
