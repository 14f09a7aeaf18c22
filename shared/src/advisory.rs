//! Advisory engine
//!
//! Pure, synchronous rule evaluation. Identical inputs always produce
//! identical advice; nothing here performs I/O or draws random numbers.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use validator::Validate;

use crate::models::{
    battery_status, moisture_status, sustainability_rating, BatteryStatus, CropHealthReport,
    CarbonTrend, CurrentConditions, Diagnosis, Emissions, EmissionsBreakdown, EstimateKind,
    FarmIrrigationInput, FarmOverview, FarmRecords, FootprintInput, FootprintResult, FuelUsage, IrrigationAdvice, SensorBattery,
    SensorDashboard, SensorReading, Severity, DISEASE_FOLLOW_UP_ACTIONS, NEXT_CHECK_HOURS,
    OPTIMAL_MOISTURE_RANGE,
};
use crate::types::{Urgency, WeatherForecast};
use crate::validation::{
    validate_area_ha, validate_crop_type, validate_percent, validate_soil_moisture,
    ValidationError,
};

// ============================================================================
// Irrigation
// ============================================================================

/// Moisture below which irrigation is urgent unless rain is coming
const CRITICAL_MOISTURE: Decimal = dec!(30);

/// Moisture below which sunny weather warrants a top-up
const LOW_MOISTURE: Decimal = dec!(50);

const URGENT_WATER_MM: Decimal = dec!(25);
const TOP_UP_WATER_MM: Decimal = dec!(15);

/// Produce irrigation advice for one field.
///
/// Rules are evaluated in order and the first match wins:
/// 1. moisture < 30 and no rain forecast: high urgency, 25 mm
/// 2. moisture < 50 and sunny: medium urgency, 15 mm
/// 3. rain forecast: postpone, 0 mm
/// 4. otherwise: no irrigation, 0 mm
pub fn recommend(
    soil_moisture_percent: Decimal,
    crop_type: &str,
    weather_forecast: WeatherForecast,
) -> Result<IrrigationAdvice, ValidationError> {
    validate_soil_moisture(soil_moisture_percent)?;
    validate_crop_type(crop_type)?;

    let crop = crop_type.trim();

    let (urgency, water_mm, advice) = if soil_moisture_percent < CRITICAL_MOISTURE
        && weather_forecast != WeatherForecast::Rain
    {
        (
            Urgency::High,
            URGENT_WATER_MM,
            format!("immediate irrigation for {crop}, soil moisture critically low."),
        )
    } else if soil_moisture_percent < LOW_MOISTURE && weather_forecast == WeatherForecast::Sunny {
        (
            Urgency::Medium,
            TOP_UP_WATER_MM,
            format!("consider irrigation for {crop}, soil moisture getting low."),
        )
    } else if weather_forecast == WeatherForecast::Rain {
        (
            Urgency::Low,
            Decimal::ZERO,
            "rain expected, postpone irrigation to avoid waterlogging.".to_string(),
        )
    } else {
        (Urgency::Low, Decimal::ZERO, "no irrigation needed.".to_string())
    };

    Ok(IrrigationAdvice {
        crop: crop.to_string(),
        soil_moisture_percent,
        weather_forecast,
        urgency,
        recommended_water_amount_mm: water_mm,
        advice,
        optimal_moisture_range: OPTIMAL_MOISTURE_RANGE,
        moisture_status: moisture_status(soil_moisture_percent),
        next_check_hours: NEXT_CHECK_HOURS,
    })
}

/// Produce irrigation advice from raw form fields.
///
/// Every field must be present; a missing field yields no recommendation.
pub fn advise(input: &FarmIrrigationInput) -> Result<IrrigationAdvice, ValidationError> {
    let moisture = input
        .soil_moisture_percent
        .ok_or(ValidationError::missing("soil_moisture_percent"))?;
    let crop = input
        .crop_type
        .as_deref()
        .ok_or(ValidationError::missing("crop_type"))?;
    let forecast: WeatherForecast = input
        .weather_forecast
        .as_deref()
        .ok_or(ValidationError::missing("weather_forecast"))?
        .parse()?;

    recommend(moisture, crop, forecast)
}

// ============================================================================
// Carbon Footprint (placeholder figures)
// ============================================================================

/// Farm id reported when the form leaves it blank
pub const DEFAULT_FARM_ID: &str = "FARM001";

/// Area reported when the form leaves it blank, in hectares
pub const DEFAULT_AREA_HA: Decimal = dec!(10);

const PLACEHOLDER_SUSTAINABILITY_SCORE: u8 = 78;

const PLACEHOLDER_RECOMMENDATIONS: &[&str] = &[
    "Consider switching to biodiesel or electric tractors.",
    "Install solar panels to reduce electricity emissions.",
    "Optimize fertilizer use with precision application.",
];

fn placeholder_breakdown() -> EmissionsBreakdown {
    EmissionsBreakdown {
        diesel: dec!(8.2),
        electricity: dec!(3.1),
        fertilizer: dec!(2.8),
        manure: dec!(1.3),
    }
}

/// Compute a farm's carbon footprint.
///
/// This is a stub: the emissions figures and score are fixed and do not
/// depend on the usage inputs, which are only validated. Only the farm id
/// and area are echoed back. The result is marked [`EstimateKind::Placeholder`].
pub fn compute_footprint(
    farm_id: Option<&str>,
    area_ha: Option<Decimal>,
    fuel_usage: &FuelUsage,
) -> Result<FootprintResult, ValidationError> {
    fuel_usage.validate()?;

    let farm_id = match farm_id.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => DEFAULT_FARM_ID.to_string(),
    };
    let area_ha = match area_ha {
        Some(area) => {
            validate_area_ha(area)?;
            area
        }
        None => DEFAULT_AREA_HA,
    };

    let breakdown = placeholder_breakdown();
    let top_contributors = breakdown.top_contributors(3);

    Ok(FootprintResult {
        farm_id,
        area_ha,
        emissions: Emissions {
            total: dec!(15.4),
            per_hectare: dec!(1.54),
            emissions_breakdown: breakdown,
            top_contributors,
        },
        sustainability_score: PLACEHOLDER_SUSTAINABILITY_SCORE,
        sustainability_rating: sustainability_rating(PLACEHOLDER_SUSTAINABILITY_SCORE),
        recommendations: PLACEHOLDER_RECOMMENDATIONS
            .iter()
            .map(|r| r.to_string())
            .collect(),
        estimate: EstimateKind::Placeholder,
    })
}

/// Compute a footprint from the calculator form
pub fn footprint_for(input: &FootprintInput) -> Result<FootprintResult, ValidationError> {
    input.validate()?;
    compute_footprint(input.farm_id.as_deref(), input.area_ha, &input.fuel_usage)
}

// ============================================================================
// Crop Health
// ============================================================================

/// Turn a classifier diagnosis into treatment advice.
///
/// A healthy crop is always reported with low severity.
pub fn crop_health_report(
    filename: Option<String>,
    diagnosis: &Diagnosis,
) -> Result<CropHealthReport, ValidationError> {
    validate_percent("confidence_percent", diagnosis.confidence_percent)?;

    let condition = diagnosis.condition;
    let (severity, recommendation, follow_up_actions) = if condition.is_healthy() {
        (
            Severity::Low,
            "Your crop looks healthy! Continue current care practices.".to_string(),
            Vec::new(),
        )
    } else {
        (
            diagnosis.severity,
            format!("Detected {condition}. Apply appropriate fungicide spray and monitor closely."),
            DISEASE_FOLLOW_UP_ACTIONS
                .iter()
                .map(|a| a.to_string())
                .collect(),
        )
    };

    Ok(CropHealthReport {
        filename,
        prediction: condition,
        prediction_label: condition.to_string(),
        confidence_percent: diagnosis.confidence_percent,
        severity,
        recommendation,
        follow_up_actions,
    })
}

// ============================================================================
// Sensors
// ============================================================================

/// Derive dashboard statuses for a sensor reading
pub fn sensor_dashboard(
    reading: SensorReading,
    refresh_interval_secs: u64,
) -> Result<SensorDashboard, ValidationError> {
    validate_soil_moisture(reading.soil_moisture_percent)?;

    let mut batteries = Vec::with_capacity(reading.battery_levels.len());
    for (sensor_id, level) in &reading.battery_levels {
        validate_percent("battery_levels", *level)?;
        batteries.push(SensorBattery {
            sensor_id: sensor_id.clone(),
            level_percent: *level,
            status: battery_status(*level),
        });
    }

    let sensors_needing_replacement = batteries
        .iter()
        .filter(|b| b.status == BatteryStatus::Replace)
        .map(|b| b.sensor_id.clone())
        .collect();

    Ok(SensorDashboard {
        moisture_status: moisture_status(reading.soil_moisture_percent),
        reading,
        batteries,
        sensors_needing_replacement,
        refresh_interval_secs,
    })
}

// ============================================================================
// Overview
// ============================================================================

/// Build the dashboard overview from farm records and today's weather.
///
/// This month's footprint and the sustainability score come from the
/// placeholder footprint.
pub fn farm_overview(
    records: FarmRecords,
    today_weather: CurrentConditions,
) -> Result<FarmOverview, ValidationError> {
    if records.last_month_tco2e < Decimal::ZERO {
        return Err(ValidationError::OutOfRange {
            field: "last_month_tco2e",
            message: "must not be negative".to_string(),
        });
    }

    let footprint = compute_footprint(None, None, &FuelUsage::default())?;
    let alerts_active = records
        .recent_alerts
        .iter()
        .filter(|a| a.severity == Urgency::High)
        .count();

    Ok(FarmOverview {
        total_farms: records.total_farms,
        healthy_fields: records.healthy_fields,
        alerts_active,
        avg_sustainability_score: footprint.sustainability_score,
        today_weather,
        recent_alerts: records.recent_alerts,
        carbon_footprint: CarbonTrend::new(footprint.emissions.total, records.last_month_tco2e),
    })
}
