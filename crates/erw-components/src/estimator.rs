//! Estimation pipeline
//!
//! Runs the full chain for one basalt application:
//!
//! ```text
//! snapshot --defaults--> environment --> SoilContext --> factors --> WF
//!     WF --> CO2 (kg) --> bands --> tonnes
//!     environment --> runoff index --> DIC export
//!     environment --> permanence
//!     application + WF + central CO2 --> audit hash
//! ```
//!
//! Every stage is a pure function of its inputs. An [`Estimator`] holds only
//! immutable parameters and can be shared between threads.

use crate::carbon::{
    CarbonAccounting, DicExport, Permanence, PermanenceClassifier, KG_PER_TONNE,
};
use crate::parameters::EstimatorParameters;
use crate::weathering::{WeatheringFactors, WeatheringModel};
use erw_core::application::ValidatedApplication;
use erw_core::audit::AuditPayload;
use erw_core::environment::{DefaultedEnvironment, EnvironmentDefaults, EnvironmentSnapshot};
use erw_core::errors::ERWResult;
use erw_core::soil::SoilContext;
use erw_core::FloatValue;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Identifies the formula version that produced a result.
pub const METHODOLOGY_VERSION: &str = "beerling-simplified-v1";

/// Outcome of one estimation. Masses are in tonnes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub methodology_version: String,
    /// Weathering fraction (1/yr)
    pub wf: FloatValue,
    pub central_co2_t: FloatValue,
    pub conservative_co2_t: FloatValue,
    pub optimistic_co2_t: FloatValue,
    pub dic_export_t: FloatValue,
    pub permanence_score: Permanence,
    /// The environment actually used, after defaulting.
    pub env_snapshot: DefaultedEnvironment,
}

/// An estimation result bound to its audit fingerprint.
///
/// Serialises flat: the result fields followed by `audit_hash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditedEstimate {
    pub application_id: String,
    #[serde(flatten)]
    pub result: EstimationResult,
    pub audit_hash: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Estimator {
    environment: EnvironmentDefaults,
    weathering: WeatheringModel,
    carbon: CarbonAccounting,
    dic_export: DicExport,
    permanence: PermanenceClassifier,
}

impl Estimator {
    pub fn new() -> Self {
        Self::from_parameters(EstimatorParameters::default())
    }

    pub fn from_parameters(parameters: EstimatorParameters) -> Self {
        Self {
            environment: parameters.environment,
            weathering: WeatheringModel::from_parameters(parameters.weathering),
            carbon: CarbonAccounting::from_parameters(parameters.carbon),
            dic_export: DicExport::from_parameters(parameters.dic_export),
            permanence: PermanenceClassifier::from_parameters(parameters.permanence),
        }
    }

    /// Estimate removal for an application, deriving the runoff index from
    /// the (defaulted) rainfall and slope.
    pub fn estimate(
        &self,
        application: &ValidatedApplication,
        snapshot: &EnvironmentSnapshot,
    ) -> EstimationResult {
        let env = snapshot.with_defaults(&self.environment);
        let runoff_index = self
            .dic_export
            .runoff_index(env.annual_rainfall_mm, env.slope_percent);
        self.estimate_defaulted(application, env, runoff_index)
    }

    /// Estimate removal with a runoff index computed elsewhere.
    ///
    /// Any real is accepted; the export fraction bounds absorb values outside
    /// [0, 1].
    pub fn estimate_with_runoff(
        &self,
        application: &ValidatedApplication,
        snapshot: &EnvironmentSnapshot,
        runoff_index: FloatValue,
    ) -> EstimationResult {
        let env = snapshot.with_defaults(&self.environment);
        self.estimate_defaulted(application, env, runoff_index)
    }

    /// Estimate and fingerprint the result.
    pub fn estimate_audited(
        &self,
        application: &ValidatedApplication,
        snapshot: &EnvironmentSnapshot,
    ) -> ERWResult<AuditedEstimate> {
        let result = self.estimate(application, snapshot);
        let audit_hash =
            AuditPayload::new(application, result.wf, result.central_co2_t).fingerprint()?;

        info!(
            application_id = %application.application_id,
            central_co2_t = result.central_co2_t,
            permanence = %result.permanence_score,
            audit_hash = %audit_hash,
            "Estimated carbon removal"
        );

        Ok(AuditedEstimate {
            application_id: application.application_id.clone(),
            result,
            audit_hash,
        })
    }

    /// Factor breakdown for an application under an environment.
    pub fn weathering_factors(
        &self,
        application: &ValidatedApplication,
        snapshot: &EnvironmentSnapshot,
    ) -> WeatheringFactors {
        let env = snapshot.with_defaults(&self.environment);
        let soil = SoilContext::from_environment(&env);
        self.weathering
            .calculate_factors(&soil, application.particle_size_mm)
    }

    fn estimate_defaulted(
        &self,
        application: &ValidatedApplication,
        env: DefaultedEnvironment,
        runoff_index: FloatValue,
    ) -> EstimationResult {
        let soil = SoilContext::from_environment(&env);
        let factors = self
            .weathering
            .calculate_factors(&soil, application.particle_size_mm);

        debug!(
            application_id = %application.application_id,
            particle = factors.particle,
            ph = factors.ph,
            clay = factors.clay,
            climate = factors.climate,
            unclamped = factors.unclamped,
            wf = factors.fraction,
            "Weathering factors"
        );

        let co2_kg = self
            .carbon
            .co2_removal_kg(application.basalt_mass_kg, factors.fraction);
        let bands = self.carbon.bands(co2_kg).to_tonnes();
        let dic_export_kg = self.dic_export.dic_export(co2_kg, runoff_index);
        let permanence = self
            .permanence
            .permanence_score(env.slope_percent, soil.clay_pct());

        EstimationResult {
            methodology_version: METHODOLOGY_VERSION.to_string(),
            wf: factors.fraction,
            central_co2_t: bands.central,
            conservative_co2_t: bands.conservative,
            optimistic_co2_t: bands.optimistic,
            dic_export_t: dic_export_kg / KG_PER_TONNE,
            permanence_score: permanence,
            env_snapshot: env,
        }
    }

    pub fn environment_defaults(&self) -> &EnvironmentDefaults {
        &self.environment
    }

    pub fn weathering(&self) -> &WeatheringModel {
        &self.weathering
    }

    pub fn carbon(&self) -> &CarbonAccounting {
        &self.carbon
    }

    pub fn dic_export(&self) -> &DicExport {
        &self.dic_export
    }

    pub fn permanence(&self) -> &PermanenceClassifier {
        &self.permanence
    }
}
