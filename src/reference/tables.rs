//! Predefined reference tables
//!
//! Process-wide, read-only. Calculations borrow from these tables and never
//! write back; custom models travel alongside as a separate slice.

use super::profiles::{GpuProfile, GridCarbonIntensity, ModelCategory, ModelProfile};
use std::sync::LazyLock;

struct ModelRow {
    id: &'static str,
    display_name: &'static str,
    family: &'static str,
    category: ModelCategory,
    parameters_billions: f64,
    energy_kwh: f64,
    gpu: &'static str,
    gpu_count: u32,
    tokens_per_second: f64,
    quality: f64,
    training_mwh: f64,
    training_tons: f64,
}

struct GpuRow {
    id: &'static str,
    name: &'static str,
    tdp_watts: f64,
    utilization: f64,
    memory_gb: f64,
    teraflops: f64,
    embodied_kg: f64,
    lifespan_hours: f64,
    cooling_lph: f64,
}

struct RegionRow {
    id: &'static str,
    provider: &'static str,
    location: &'static str,
    g_per_kwh: f64,
    renewable: f64,
    source: &'static str,
}

const GRID_YEAR: u16 = 2023;

use ModelCategory::{FrontierLlm, MidSizeLlm, SmallEdge};

#[rustfmt::skip]
const MODEL_ROWS: &[ModelRow] = &[
    ModelRow { id: "gpt4", display_name: "GPT-4 Class (≈1.8T params)", family: "gpt-4-class", category: FrontierLlm, parameters_billions: 1800.0, energy_kwh: 4.2, gpu: "nvidia-a100-80gb", gpu_count: 8, tokens_per_second: 40.0, quality: 95.0, training_mwh: 62000.0, training_tons: 21000.0 },
    ModelRow { id: "gpt35", display_name: "GPT-3.5 Class (≈175B params)", family: "gpt-3.5-class", category: MidSizeLlm, parameters_billions: 175.0, energy_kwh: 0.45, gpu: "nvidia-a100-40gb", gpu_count: 2, tokens_per_second: 120.0, quality: 78.0, training_mwh: 1287.0, training_tons: 552.0 },
    ModelRow { id: "claude3-opus", display_name: "Claude 3 Opus Class", family: "claude-3-opus", category: FrontierLlm, parameters_billions: 500.0, energy_kwh: 2.8, gpu: "nvidia-a100-80gb", gpu_count: 4, tokens_per_second: 50.0, quality: 93.0, training_mwh: 30000.0, training_tons: 10200.0 },
    ModelRow { id: "claude3-sonnet", display_name: "Claude 3 Sonnet Class", family: "claude-3-sonnet", category: MidSizeLlm, parameters_billions: 150.0, energy_kwh: 0.55, gpu: "nvidia-a100-40gb", gpu_count: 2, tokens_per_second: 100.0, quality: 85.0, training_mwh: 8000.0, training_tons: 2720.0 },
    ModelRow { id: "claude3-haiku", display_name: "Claude 3 Haiku Class", family: "claude-3-haiku", category: SmallEdge, parameters_billions: 30.0, energy_kwh: 0.08, gpu: "nvidia-a10g", gpu_count: 1, tokens_per_second: 300.0, quality: 72.0, training_mwh: 1500.0, training_tons: 510.0 },
    ModelRow { id: "llama70b", display_name: "Llama 3 70B", family: "llama-70b", category: MidSizeLlm, parameters_billions: 70.0, energy_kwh: 0.85, gpu: "nvidia-a100-80gb", gpu_count: 2, tokens_per_second: 80.0, quality: 80.0, training_mwh: 6500.0, training_tons: 2210.0 },
    ModelRow { id: "llama13b", display_name: "Llama 2 13B", family: "llama-13b", category: SmallEdge, parameters_billions: 13.0, energy_kwh: 0.15, gpu: "nvidia-a10g", gpu_count: 1, tokens_per_second: 150.0, quality: 62.0, training_mwh: 1200.0, training_tons: 408.0 },
    ModelRow { id: "llama7b", display_name: "Llama 2 7B", family: "llama-7b", category: SmallEdge, parameters_billions: 7.0, energy_kwh: 0.05, gpu: "nvidia-t4", gpu_count: 1, tokens_per_second: 200.0, quality: 55.0, training_mwh: 500.0, training_tons: 170.0 },
    ModelRow { id: "mistral7b", display_name: "Mistral 7B", family: "mistral-7b", category: SmallEdge, parameters_billions: 7.0, energy_kwh: 0.04, gpu: "nvidia-t4", gpu_count: 1, tokens_per_second: 220.0, quality: 60.0, training_mwh: 400.0, training_tons: 136.0 },
    ModelRow { id: "mixtral8x7b", display_name: "Mixtral 8x7B (MoE)", family: "mixtral-8x7b", category: MidSizeLlm, parameters_billions: 47.0, energy_kwh: 0.25, gpu: "nvidia-a100-40gb", gpu_count: 1, tokens_per_second: 110.0, quality: 74.0, training_mwh: 2000.0, training_tons: 680.0 },
    ModelRow { id: "gemini-pro", display_name: "Gemini Pro Class", family: "gemini-pro", category: FrontierLlm, parameters_billions: 300.0, energy_kwh: 1.8, gpu: "nvidia-h100", gpu_count: 4, tokens_per_second: 70.0, quality: 90.0, training_mwh: 25000.0, training_tons: 8500.0 },
    ModelRow { id: "grok-2", display_name: "Grok-2 (xAI, ≈314B params)", family: "grok-2", category: FrontierLlm, parameters_billions: 314.0, energy_kwh: 2.4, gpu: "nvidia-h100", gpu_count: 4, tokens_per_second: 55.0, quality: 88.0, training_mwh: 35000.0, training_tons: 11900.0 },
    ModelRow { id: "deepseek-v3", display_name: "DeepSeek-V3 (MoE, 671B total / 37B active)", family: "deepseek-v3", category: FrontierLlm, parameters_billions: 671.0, energy_kwh: 0.95, gpu: "nvidia-h100", gpu_count: 4, tokens_per_second: 90.0, quality: 86.0, training_mwh: 5500.0, training_tons: 1870.0 },
    ModelRow { id: "gemini-flash-2", display_name: "Gemini 2.0 Flash (Google, distilled)", family: "gemini-flash", category: SmallEdge, parameters_billions: 9.0, energy_kwh: 0.10, gpu: "nvidia-t4", gpu_count: 1, tokens_per_second: 180.0, quality: 74.0, training_mwh: 800.0, training_tons: 272.0 },
    ModelRow { id: "llama-3.1-405b", display_name: "Llama 3.1 405B (Meta, open-weight)", family: "llama-3.1-405b", category: FrontierLlm, parameters_billions: 405.0, energy_kwh: 3.6, gpu: "nvidia-h100", gpu_count: 8, tokens_per_second: 30.0, quality: 92.0, training_mwh: 39000.0, training_tons: 13260.0 },
    ModelRow { id: "qwen-72b", display_name: "Qwen 2.5 72B (Alibaba Cloud)", family: "qwen-72b", category: MidSizeLlm, parameters_billions: 72.0, energy_kwh: 0.90, gpu: "nvidia-a100-80gb", gpu_count: 2, tokens_per_second: 75.0, quality: 82.0, training_mwh: 7000.0, training_tons: 2380.0 },
    ModelRow { id: "dbrx", display_name: "DBRX 132B (Databricks, MoE)", family: "dbrx", category: MidSizeLlm, parameters_billions: 132.0, energy_kwh: 1.10, gpu: "nvidia-a100-80gb", gpu_count: 4, tokens_per_second: 60.0, quality: 78.0, training_mwh: 9000.0, training_tons: 3060.0 },
    ModelRow { id: "phi-3-medium", display_name: "Phi-3 Medium 14B (Microsoft)", family: "phi-3-medium", category: SmallEdge, parameters_billions: 14.0, energy_kwh: 0.18, gpu: "nvidia-a10g", gpu_count: 1, tokens_per_second: 130.0, quality: 71.0, training_mwh: 1400.0, training_tons: 476.0 },
    ModelRow { id: "command-r-plus", display_name: "Command R+ (Cohere, 104B)", family: "command-r-plus", category: MidSizeLlm, parameters_billions: 104.0, energy_kwh: 1.50, gpu: "nvidia-a100-80gb", gpu_count: 2, tokens_per_second: 65.0, quality: 83.0, training_mwh: 8500.0, training_tons: 2890.0 },
    ModelRow { id: "gemma-7b", display_name: "Gemma 2 9B (Google, open)", family: "gemma-7b", category: SmallEdge, parameters_billions: 9.0, energy_kwh: 0.06, gpu: "nvidia-t4", gpu_count: 1, tokens_per_second: 170.0, quality: 64.0, training_mwh: 600.0, training_tons: 204.0 },
];

#[rustfmt::skip]
const GPU_ROWS: &[GpuRow] = &[
    GpuRow { id: "nvidia-h100", name: "NVIDIA H100 SXM5", tdp_watts: 700.0, utilization: 0.65, memory_gb: 80.0, teraflops: 989.0, embodied_kg: 150.0, lifespan_hours: 35000.0, cooling_lph: 2.8 },
    GpuRow { id: "nvidia-a100-80gb", name: "NVIDIA A100 80GB SXM", tdp_watts: 400.0, utilization: 0.60, memory_gb: 80.0, teraflops: 312.0, embodied_kg: 130.0, lifespan_hours: 35000.0, cooling_lph: 1.8 },
    GpuRow { id: "nvidia-a100-40gb", name: "NVIDIA A100 40GB", tdp_watts: 400.0, utilization: 0.55, memory_gb: 40.0, teraflops: 312.0, embodied_kg: 120.0, lifespan_hours: 35000.0, cooling_lph: 1.7 },
    GpuRow { id: "nvidia-v100", name: "NVIDIA V100 32GB", tdp_watts: 300.0, utilization: 0.50, memory_gb: 32.0, teraflops: 125.0, embodied_kg: 100.0, lifespan_hours: 35000.0, cooling_lph: 1.2 },
    GpuRow { id: "nvidia-t4", name: "NVIDIA T4", tdp_watts: 70.0, utilization: 0.50, memory_gb: 16.0, teraflops: 65.0, embodied_kg: 50.0, lifespan_hours: 35000.0, cooling_lph: 0.4 },
    GpuRow { id: "nvidia-a10g", name: "NVIDIA A10G", tdp_watts: 150.0, utilization: 0.55, memory_gb: 24.0, teraflops: 125.0, embodied_kg: 70.0, lifespan_hours: 35000.0, cooling_lph: 0.7 },
    GpuRow { id: "cpu-only", name: "CPU Only (Intel Xeon)", tdp_watts: 250.0, utilization: 0.40, memory_gb: 0.0, teraflops: 2.0, embodied_kg: 40.0, lifespan_hours: 50000.0, cooling_lph: 0.5 },
];

#[rustfmt::skip]
const REGION_ROWS: &[RegionRow] = &[
    // Americas
    RegionRow { id: "ca-central-1", provider: "aws", location: "Montreal, Canada", g_per_kwh: 14.0, renewable: 95.0, source: "Environment Canada NIR 2023 (Quebec grid)" },
    RegionRow { id: "us-west-2", provider: "aws", location: "Oregon, USA", g_per_kwh: 78.0, renewable: 68.0, source: "EIA eGRID 2023 (NWPP)" },
    RegionRow { id: "us-east-1", provider: "aws", location: "Virginia, USA", g_per_kwh: 338.0, renewable: 22.0, source: "EIA eGRID 2023 (SERC Virginia)" },
    RegionRow { id: "us-central1", provider: "gcp", location: "Iowa, USA", g_per_kwh: 410.0, renewable: 42.0, source: "EIA eGRID 2023 (MROE)" },
    RegionRow { id: "sa-east-1", provider: "aws", location: "São Paulo, Brazil", g_per_kwh: 61.0, renewable: 83.0, source: "MCTI Brazil National Inventory 2023" },
    // Europe
    RegionRow { id: "eu-north-1", provider: "aws", location: "Stockholm, Sweden", g_per_kwh: 9.0, renewable: 98.0, source: "Swedish Energy Agency 2023" },
    RegionRow { id: "eu-west-3", provider: "aws", location: "Paris, France", g_per_kwh: 56.0, renewable: 92.0, source: "RTE France Bilan Electrique 2023" },
    RegionRow { id: "eu-west-1", provider: "aws", location: "Ireland", g_per_kwh: 296.0, renewable: 40.0, source: "EEA 2023" },
    RegionRow { id: "europe-west4", provider: "gcp", location: "Netherlands", g_per_kwh: 328.0, renewable: 33.0, source: "CBS Netherlands 2023" },
    RegionRow { id: "eu-central-1", provider: "aws", location: "Frankfurt, Germany", g_per_kwh: 350.0, renewable: 46.0, source: "UBA Germany 2023" },
    // Middle East & Africa
    RegionRow { id: "me-south-1", provider: "aws", location: "Bahrain", g_per_kwh: 532.0, renewable: 5.0, source: "IEA World Energy Outlook 2023 (Bahrain)" },
    RegionRow { id: "af-south-1", provider: "aws", location: "Cape Town, South Africa", g_per_kwh: 928.0, renewable: 7.0, source: "Eskom Integrated Report 2023" },
    // Asia-Pacific
    RegionRow { id: "ap-south-1", provider: "aws", location: "Mumbai, India", g_per_kwh: 708.0, renewable: 12.0, source: "CEA India CO2 Baseline Database v19 (2023)" },
    RegionRow { id: "ap-south-2", provider: "aws", location: "Hyderabad, India", g_per_kwh: 708.0, renewable: 12.0, source: "CEA India CO2 Baseline Database v19 (2023)" },
    RegionRow { id: "ap-southeast-1", provider: "aws", location: "Singapore", g_per_kwh: 408.0, renewable: 3.0, source: "EMA Singapore 2023" },
    RegionRow { id: "ap-northeast-2", provider: "aws", location: "Seoul, South Korea", g_per_kwh: 415.0, renewable: 9.0, source: "KEPCO Sustainability Report 2023" },
    RegionRow { id: "ap-northeast-1", provider: "aws", location: "Tokyo, Japan", g_per_kwh: 462.0, renewable: 22.0, source: "METI Japan 2023" },
    RegionRow { id: "ap-southeast-2", provider: "aws", location: "Sydney, Australia", g_per_kwh: 660.0, renewable: 32.0, source: "Australian Government DISER 2023" },
];

/// Predefined model profiles
pub static MODEL_PROFILES: LazyLock<Vec<ModelProfile>> = LazyLock::new(|| {
    MODEL_ROWS
        .iter()
        .map(|row| ModelProfile {
            id: row.id.to_string(),
            display_name: row.display_name.to_string(),
            family: row.family.to_string(),
            category: row.category,
            parameters_billions: row.parameters_billions,
            gpu: row.gpu.to_string(),
            gpu_count_inference: row.gpu_count,
            tokens_per_second_per_gpu: row.tokens_per_second,
            energy_per_million_tokens_kwh: row.energy_kwh,
            training_energy_mwh: row.training_mwh,
            training_co2e_tons: row.training_tons,
            quality_score: row.quality,
            description: None,
        })
        .collect()
});

/// GPU hardware profiles
pub static GPU_PROFILES: LazyLock<Vec<GpuProfile>> = LazyLock::new(|| {
    GPU_ROWS
        .iter()
        .map(|row| GpuProfile {
            id: row.id.to_string(),
            name: row.name.to_string(),
            tdp_watts: row.tdp_watts,
            typical_utilization: row.utilization,
            memory_gb: row.memory_gb,
            flops_teraflops: row.teraflops,
            embodied_carbon_kg_co2e: row.embodied_kg,
            expected_lifespan_hours: row.lifespan_hours,
            water_cooling_liters_per_hour: row.cooling_lph,
        })
        .collect()
});

/// Grid carbon intensity per region
pub static GRID_INTENSITIES: LazyLock<Vec<GridCarbonIntensity>> = LazyLock::new(|| {
    REGION_ROWS
        .iter()
        .map(|row| GridCarbonIntensity {
            region_id: row.id.to_string(),
            provider: row.provider.to_string(),
            location: row.location.to_string(),
            g_co2e_per_kwh: row.g_per_kwh,
            renewable_percentage: row.renewable,
            source: row.source.to_string(),
            year: GRID_YEAR,
        })
        .collect()
});
