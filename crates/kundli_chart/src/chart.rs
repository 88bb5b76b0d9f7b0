//! Chart assembly: one birth moment in, one complete kundli out.
//!
//! `compute_chart` is the single entry point callers use. It validates the
//! birth input up front, then runs the whole pipeline (Julian Day, sidereal
//! time, ayanamsa, planetary longitudes, lagna, houses, nakshatra,
//! panchanga) as pure arithmetic: the same input always produces a
//! bit-identical chart.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use kundli_time::{gmst_hours, julian_day, local_sidereal_hours, parse_datetime};

use crate::ascendant::sidereal_lagna_deg;
use crate::ayanamsa::{Ayanamsa, ayanamsa_deg};
use crate::error::ChartError;
use crate::houses::{HouseCusp, equal_house_cusps, house_of};
use crate::nakshatra::nakshatra_from_longitude;
use crate::panchanga::{Panchanga, panchanga_from_longitudes};
use crate::planet::Planet;
use crate::position::sidereal_longitudes;
use crate::sign::{Sign, sign_from_longitude};

/// Validated birth input for a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    /// Birth instant in UTC.
    pub instant: DateTime<Utc>,
    /// Geographic latitude in degrees, [-90, 90].
    pub latitude: f64,
    /// Geographic longitude in degrees, [-180, 180], east positive.
    pub longitude: f64,
    /// IANA timezone label, echoed into the chart for display only.
    pub timezone: String,
    /// Ayanamsa scheme id (1 = Lahiri, 2 = Raman, 3 = KP).
    pub ayanamsa_id: u8,
}

impl BirthMoment {
    /// Parse a birth moment from its string/scalar parts.
    pub fn from_parts(
        datetime: &str,
        latitude: f64,
        longitude: f64,
        timezone: &str,
        ayanamsa_id: u8,
    ) -> Result<Self, ChartError> {
        let moment = Self {
            instant: parse_datetime(datetime)?,
            latitude,
            longitude,
            timezone: timezone.to_owned(),
            ayanamsa_id,
        };
        moment.validate()?;
        Ok(moment)
    }

    /// Reject out-of-range or non-finite coordinates.
    ///
    /// No clamping: a bad input fails loudly instead of producing a chart
    /// for a place that does not exist. NaN fails both range checks.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::LatitudeOutOfRange {
                latitude: self.latitude,
            });
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::LongitudeOutOfRange {
                longitude: self.longitude,
            });
        }
        Ok(())
    }
}

/// The ascendant with its sign context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lagna {
    /// Sidereal longitude of the ascendant, [0, 360).
    pub longitude: f64,
    /// Sign containing the ascendant.
    pub sign: Sign,
    /// Lord of that sign.
    pub sign_lord: Planet,
    /// Decimal degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
}

/// The Moon's nakshatra placement, which seeds the dasha timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraSummary {
    /// 0-based nakshatra index (0 = Ashwini).
    pub index: u8,
    /// Nakshatra name.
    pub name: String,
    /// Ruling Vimshottari lord.
    pub lord: Planet,
    /// Pada, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra.
    pub degrees_in_nakshatra: f64,
}

/// One planet's placement in the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    /// The planet.
    pub planet: Planet,
    /// Sidereal longitude, [0, 360).
    pub longitude: f64,
    /// Sign containing the planet.
    pub sign: Sign,
    /// Lord of that sign.
    pub sign_lord: Planet,
    /// Decimal degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
    /// Name of the nakshatra containing the planet.
    pub nakshatra: String,
    /// Lord of that nakshatra.
    pub nakshatra_lord: Planet,
    /// Pada within the nakshatra, 1-4.
    pub pada: u8,
    /// Occupied house, 1-12.
    pub house: u8,
    /// Always `false`: mean-element longitudes carry no velocity, so
    /// retrograde motion is not detected. The field stays in the data model
    /// for consumers that expect it.
    pub retrograde: bool,
}

/// A complete computed kundli.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// The validated birth input the chart was computed from.
    pub birth: BirthMoment,
    /// Birth instant as a Julian Day (UTC).
    pub birth_jd: f64,
    /// Ayanamsa scheme name.
    pub ayanamsa: String,
    /// Ayanamsa value at the birth instant, degrees.
    pub ayanamsa_deg: f64,
    /// The ascendant.
    pub lagna: Lagna,
    /// The Moon's nakshatra, seed of the dasha timeline.
    pub nakshatra: NakshatraSummary,
    /// All 9 planets, in the fixed Sun..Ketu order.
    pub planets: Vec<PlanetPosition>,
    /// The 12 equal-house cusps, house 1 anchored at the lagna.
    pub houses: [HouseCusp; 12],
    /// Tithi, yoga, and karana labels at birth.
    pub panchanga: Panchanga,
}

/// Compute the full chart for a birth moment.
///
/// Fails only on invalid input; once validation passes, every downstream
/// step is total. The output is deterministic to the bit.
pub fn compute_chart(moment: &BirthMoment) -> Result<Chart, ChartError> {
    moment.validate()?;

    let jd = julian_day(moment.instant);
    let scheme = Ayanamsa::from_id(moment.ayanamsa_id);
    let aya = ayanamsa_deg(scheme, jd);

    let lst = local_sidereal_hours(gmst_hours(jd), moment.longitude);
    let lagna_deg = sidereal_lagna_deg(lst, moment.latitude, jd, scheme);
    let lagna_sign = sign_from_longitude(lagna_deg);
    let lagna = Lagna {
        longitude: lagna_deg,
        sign: lagna_sign.sign,
        sign_lord: lagna_sign.sign.lord(),
        degrees_in_sign: lagna_sign.degrees_in_sign,
    };

    debug!(
        jd,
        lst_hours = lst,
        ayanamsa = aya,
        lagna = lagna_deg,
        scheme = scheme.name(),
        "chart pipeline inputs resolved"
    );

    let mut planets = Vec::with_capacity(9);
    let mut moon_longitude = 0.0;
    let mut sun_longitude = 0.0;
    for (planet, longitude) in sidereal_longitudes(jd, scheme) {
        match planet {
            Planet::Sun => sun_longitude = longitude,
            Planet::Moon => moon_longitude = longitude,
            _ => {}
        }
        let sign_info = sign_from_longitude(longitude);
        let nak = nakshatra_from_longitude(longitude);
        planets.push(PlanetPosition {
            planet,
            longitude,
            sign: sign_info.sign,
            sign_lord: sign_info.sign.lord(),
            degrees_in_sign: sign_info.degrees_in_sign,
            nakshatra: nak.name.to_owned(),
            nakshatra_lord: nak.lord,
            pada: nak.pada,
            house: house_of(lagna_deg, longitude),
            retrograde: false,
        });
    }

    let moon_nak = nakshatra_from_longitude(moon_longitude);
    let nakshatra = NakshatraSummary {
        index: moon_nak.index,
        name: moon_nak.name.to_owned(),
        lord: moon_nak.lord,
        pada: moon_nak.pada,
        degrees_in_nakshatra: moon_nak.degrees_in_nakshatra,
    };

    Ok(Chart {
        birth: moment.clone(),
        birth_jd: jd,
        ayanamsa: scheme.name().to_owned(),
        ayanamsa_deg: aya,
        lagna,
        nakshatra,
        planets,
        houses: equal_house_cusps(lagna_deg),
        panchanga: panchanga_from_longitudes(sun_longitude, moon_longitude),
    })
}
