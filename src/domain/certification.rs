use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::normalize::lenient::{null_as_default, optional_f64};

use super::processes::Machine;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardVariableRef {
    pub variable_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub unit: Option<String>,
}

/// Acceptance window for one variable of a machine step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessMachineVariable {
    pub variable_id: Option<i64>,
    pub standard_variable_id: i64,
    #[serde(default, deserialize_with = "optional_f64")]
    pub min_value: Option<f64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub max_value: Option<f64>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub target_value: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mandatory: bool,
    #[serde(default, rename = "standardVariable", skip_serializing_if = "Option::is_none")]
    pub standard_variable_camel: Option<StandardVariableRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_variable: Option<StandardVariableRef>,
}

impl ProcessMachineVariable {
    /// The joined variable under either key the backend uses. The snake_case key wins.
    pub fn variable_ref(&self) -> Option<&StandardVariableRef> {
        self.standard_variable
            .as_ref()
            .or(self.standard_variable_camel.as_ref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificationStep {
    pub process_machine_id: i64,
    pub process_id: Option<i64>,
    pub machine_id: Option<i64>,
    pub step_order: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub estimated_time: Option<f64>,
    pub machine: Option<Machine>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variables: Vec<ProcessMachineVariable>,
}

/// Steps of the process assigned to a batch and which of them already have a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatchProcessMachines {
    pub process_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub process_machines: Vec<CertificationStep>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_records: Vec<i64>,
}

impl BatchProcessMachines {
    /// Next step without a record, in step order.
    pub fn next_pending_step(&self) -> Option<&CertificationStep> {
        self.process_machines
            .iter()
            .filter(|step| !self.completed_records.contains(&step.process_machine_id))
            .min_by_key(|step| step.step_order)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProcessMachineRecord {
    pub batch_id: i64,
    pub process_machine_id: i64,
    pub entered_variables: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessMachineRecord {
    pub record_id: i64,
    pub batch_id: i64,
    pub process_machine_id: i64,
    pub operator_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entered_variables: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meets_standard: bool,
    pub observations: Option<String>,
    pub record_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertifiedMachine {
    pub step_number: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub machine_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entered_variables: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meets_standard: bool,
    pub record_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificationResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reason: String,
    pub evaluation_date: Option<String>,
    pub inspector: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CertificationLog {
    #[serde(default, deserialize_with = "null_as_default")]
    pub machines: Vec<CertifiedMachine>,
    pub final_result: Option<CertificationResult>,
}
