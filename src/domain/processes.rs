use serde::{Deserialize, Serialize};

use crate::normalize::lenient::{null_as_default, optional_f64};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Machine {
    pub machine_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub active: Option<bool>,
}

/// One ordered step of a process, bound to a machine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessMachine {
    pub process_machine_id: Option<i64>,
    pub process_id: Option<i64>,
    pub machine_id: i64,
    pub step_order: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_f64")]
    pub estimated_time: Option<f64>,
    pub machine: Option<Machine>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Process {
    pub process_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub active: Option<bool>,
    pub process_machines: Option<Vec<ProcessMachine>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessMachineInput {
    pub machine_id: i64,
    pub step_order: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<f64>,
}

/// Body of `POST /processes`; every field is optional on update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProcessInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_machines: Option<Vec<ProcessMachineInput>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StandardVariable {
    pub variable_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StandardVariableInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn process_with_and_without_machines() {
        let bare: Process =
            serde_json::from_value(json!({"process_id": 1, "code": "P-1", "name": "Extrusion"})).unwrap();
        assert!(bare.process_machines.is_none());

        let full: Process = serde_json::from_value(json!({
            "process_id": 1,
            "name": "Extrusion",
            "process_machines": [
                {"process_machine_id": 3, "machine_id": 2, "step_order": 1, "name": "Mezcla",
                 "machine": {"machine_id": 2, "code": "M-2", "name": "Mezcladora"}}
            ]
        }))
        .unwrap();
        let steps = full.process_machines.unwrap();
        assert_eq!(steps[0].machine.as_ref().unwrap().code, "M-2");
    }

    #[test]
    fn partial_update_serializes_only_set_fields() {
        let update = StandardVariableInput {
            unit: Some("°C".into()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(update).unwrap(), json!({"unit": "°C"}));
    }
}
