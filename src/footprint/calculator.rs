//! Footprint computation

use crate::error::Result;
use crate::narrative::{Assumption, ParameterSource};
use crate::reference::{
    equivalencies, resolve_gpu, resolve_model, resolve_region, GpuProfile, GridCarbonIntensity,
    ModelOrigin, ModelProfile, DEFAULT_PUE, DEFAULT_WUE_LITERS_PER_KWH,
};
use serde::{Deserialize, Serialize};

/// Optional inputs to [`compute_footprint`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FootprintOptions<'a> {
    /// Power Usage Effectiveness; engine default when `None`
    pub pue: Option<f64>,
    /// Water Usage Effectiveness (L/kWh); engine default when `None`
    pub wue: Option<f64>,
    /// GPU profile id replacing the model's default GPU
    pub gpu_override: Option<&'a str>,
    /// Caller-supplied profiles consulted after the predefined table
    pub extra_models: &'a [ModelProfile],
}

impl<'a> FootprintOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pue(mut self, pue: f64) -> Self {
        self.pue = Some(pue);
        self
    }

    pub fn with_wue(mut self, wue: f64) -> Self {
        self.wue = Some(wue);
        self
    }

    pub fn with_gpu(mut self, gpu_id: &'a str) -> Self {
        self.gpu_override = Some(gpu_id);
        self
    }

    pub fn with_extra_models(mut self, extra_models: &'a [ModelProfile]) -> Self {
        self.extra_models = extra_models;
        self
    }
}

/// Footprint divided across requests
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerRequest {
    pub energy_kwh: f64,
    pub co2e_grams: f64,
    pub water_liters: f64,
}

/// Absolute footprint of one workload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub energy_kwh: f64,
    pub co2e_grams: f64,
    pub water_liters: f64,
    /// Embodied GPU carbon amortized over the workload duration
    pub hardware_amortized_grams: f64,
    pub duration_hours: f64,
    pub per_request: PerRequest,
    pub equivalent_km_driving: f64,
    pub equivalent_smartphone_charges: f64,
    pub model: ModelProfile,
    pub model_origin: ModelOrigin,
    pub gpu: GpuProfile,
    pub grid: GridCarbonIntensity,
    pub assumptions: Vec<Assumption>,
}

impl FootprintResult {
    /// Total emissions in kilograms
    pub fn co2e_kg(&self) -> f64 {
        self.co2e_grams / 1000.0
    }

    /// Copy with every volume-dependent metric scaled by `factor`
    ///
    /// Duration is wall-clock at nominal throughput and stays as computed.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            energy_kwh: self.energy_kwh * factor,
            co2e_grams: self.co2e_grams * factor,
            water_liters: self.water_liters * factor,
            hardware_amortized_grams: self.hardware_amortized_grams * factor,
            duration_hours: self.duration_hours,
            per_request: PerRequest {
                energy_kwh: self.per_request.energy_kwh * factor,
                co2e_grams: self.per_request.co2e_grams * factor,
                water_liters: self.per_request.water_liters * factor,
            },
            equivalent_km_driving: self.equivalent_km_driving * factor,
            equivalent_smartphone_charges: self.equivalent_smartphone_charges * factor,
            ..self.clone()
        }
    }
}

fn coefficient(value: Option<f64>, default: f64) -> (f64, ParameterSource) {
    match value {
        Some(v) => (v, ParameterSource::Override),
        None => (default, ParameterSource::Default),
    }
}

/// Compute the footprint of `total_tokens` across `request_count` requests
///
/// Token and request counts are trusted as validated; per-request figures
/// divide by at least one request.
pub fn compute_footprint(
    model_id: &str,
    region_id: &str,
    total_tokens: u64,
    request_count: u64,
    options: &FootprintOptions<'_>,
) -> Result<FootprintResult> {
    let resolved = resolve_model(model_id, options.extra_models)?;
    let model = resolved.profile;
    let gpu = resolve_gpu(options.gpu_override.unwrap_or(&model.gpu))?;
    let grid = resolve_region(region_id)?;

    let (pue, pue_source) = coefficient(options.pue, DEFAULT_PUE);
    let (wue, wue_source) = coefficient(options.wue, DEFAULT_WUE_LITERS_PER_KWH);
    let tokens = total_tokens as f64;
    let gpu_count = f64::from(model.gpu_count_inference);

    let energy_kwh = (tokens / 1_000_000.0) * model.energy_per_million_tokens_kwh * pue;
    let duration_hours = model.inference_hours(tokens);
    let co2e_grams = energy_kwh * grid.g_co2e_per_kwh;
    let water_liters = energy_kwh * wue + gpu.water_cooling_liters_per_hour * duration_hours;
    let hardware_amortized_grams = gpu.embodied_grams_per_hour() * gpu_count * duration_hours;

    let requests = request_count.max(1) as f64;
    let per_request = PerRequest {
        energy_kwh: energy_kwh / requests,
        co2e_grams: co2e_grams / requests,
        water_liters: water_liters / requests,
    };

    let assumptions = vec![
        Assumption::Pue { value: pue, source: pue_source },
        Assumption::Wue { value: wue, source: wue_source },
        Assumption::Duration {
            hours: duration_hours,
            tokens_per_second_per_gpu: model.tokens_per_second_per_gpu,
            gpu_count: model.gpu_count_inference,
        },
        Assumption::GridIntensity {
            g_co2e_per_kwh: grid.g_co2e_per_kwh,
            source: grid.source.clone(),
        },
        Assumption::EmbodiedCarbon {
            kg_co2e: gpu.embodied_carbon_kg_co2e,
            lifespan_hours: gpu.expected_lifespan_hours,
        },
    ];

    Ok(FootprintResult {
        energy_kwh,
        co2e_grams,
        water_liters,
        hardware_amortized_grams,
        duration_hours,
        per_request,
        equivalent_km_driving: co2e_grams / 1000.0 * equivalencies::KM_DRIVING_PER_KG_CO2E,
        equivalent_smartphone_charges: energy_kwh * equivalencies::SMARTPHONE_CHARGES_PER_KWH,
        model: model.clone(),
        model_origin: resolved.origin,
        gpu: gpu.clone(),
        grid: grid.clone(),
        assumptions,
    })
}
