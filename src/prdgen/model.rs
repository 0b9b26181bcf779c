//! Core data types: the document schema, sections, and render settings.
//!
//! The schema is closed. Every scalar and list field a document can hold is
//! declared once in [`prd_fields!`], which generates the [`PrdData`] struct,
//! the [`ScalarField`]/[`ListField`] enums, the wire names used in the
//! persisted JSON payload, and the accessors, so they cannot drift apart.

use crate::error::{PrdError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output encoding for a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Markdown,
    Notion,
    Gdocs,
    Text,
}

impl Format {
    pub fn key(&self) -> &'static str {
        match self {
            Format::Markdown => "markdown",
            Format::Notion => "notion",
            Format::Gdocs => "gdocs",
            Format::Text => "text",
        }
    }
}

impl FromStr for Format {
    type Err = PrdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "markdown" => Ok(Format::Markdown),
            "notion" => Ok(Format::Notion),
            "gdocs" => Ok(Format::Gdocs),
            "text" => Ok(Format::Text),
            other => Err(PrdError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// How raw field text is normalized at render time.
///
/// `Verbatim` emits the trimmed text unchanged; `Assisted` capitalizes the
/// first character and adds trailing punctuation to sentence fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhrasingMode {
    Verbatim,
    Assisted,
}

impl PhrasingMode {
    pub fn key(&self) -> &'static str {
        match self {
            PhrasingMode::Verbatim => "verbatim",
            PhrasingMode::Assisted => "assisted",
        }
    }
}

impl FromStr for PhrasingMode {
    type Err = PrdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "verbatim" => Ok(PhrasingMode::Verbatim),
            "assisted" => Ok(PhrasingMode::Assisted),
            other => Err(PrdError::UnknownPhrasing(other.to_string())),
        }
    }
}

impl fmt::Display for PhrasingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A named, independently togglable group of fields with a fixed position in
/// render order. Variant order here IS the render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Role,
    MvpGoal,
    TargetUser,
    CoreFlow,
    Scope,
    Implementation,
    OutOfScope,
    Context,
    Instruction,
    Vision,
    DesignPrinciples,
    UxDetails,
    CodeQuality,
    Constraints,
}

impl SectionKey {
    /// All sections, in render order.
    pub const ALL: &'static [SectionKey] = &[
        SectionKey::Role,
        SectionKey::MvpGoal,
        SectionKey::TargetUser,
        SectionKey::CoreFlow,
        SectionKey::Scope,
        SectionKey::Implementation,
        SectionKey::OutOfScope,
        SectionKey::Context,
        SectionKey::Instruction,
        SectionKey::Vision,
        SectionKey::DesignPrinciples,
        SectionKey::UxDetails,
        SectionKey::CodeQuality,
        SectionKey::Constraints,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SectionKey::Role => "role",
            SectionKey::MvpGoal => "mvpGoal",
            SectionKey::TargetUser => "targetUser",
            SectionKey::CoreFlow => "coreFlow",
            SectionKey::Scope => "scope",
            SectionKey::Implementation => "implementation",
            SectionKey::OutOfScope => "outOfScope",
            SectionKey::Context => "context",
            SectionKey::Instruction => "instruction",
            SectionKey::Vision => "vision",
            SectionKey::DesignPrinciples => "designPrinciples",
            SectionKey::UxDetails => "uxDetails",
            SectionKey::CodeQuality => "codeQuality",
            SectionKey::Constraints => "constraints",
        }
    }

    /// Human-readable label for listings.
    pub fn label(&self) -> &'static str {
        match self {
            SectionKey::Role => "Role",
            SectionKey::MvpGoal => "MVP Goal",
            SectionKey::TargetUser => "Target User",
            SectionKey::CoreFlow => "Core Flow",
            SectionKey::Scope => "MVP Scope (In)",
            SectionKey::Implementation => "Implementation Details",
            SectionKey::OutOfScope => "Explicitly Out of Scope",
            SectionKey::Context => "Context",
            SectionKey::Instruction => "Instruction",
            SectionKey::Vision => "Vision & Core Concepts",
            SectionKey::DesignPrinciples => "Design Principles",
            SectionKey::UxDetails => "UX & Interaction Details",
            SectionKey::CodeQuality => "Code Quality & Performance",
            SectionKey::Constraints => "Constraints",
        }
    }
}

impl FromStr for SectionKey {
    type Err = PrdError;

    fn from_str(s: &str) -> Result<Self> {
        SectionKey::ALL
            .iter()
            .find(|key| key.key() == s)
            .copied()
            .ok_or_else(|| PrdError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Declares every field of the document in one place.
///
/// Scalar entries are `Variant => rust_field: "wireName"`, list entries add
/// the number of empty slots the default state seeds for the editor UI.
macro_rules! prd_fields {
    (
        scalars { $($svar:ident => $sfield:ident: $skey:literal),+ $(,)? }
        lists { $($lvar:ident => $lfield:ident: $lkey:literal, $slots:literal),+ $(,)? }
    ) => {
        /// The flat record of all document content.
        ///
        /// Grouping into sections is rendering metadata only; the record
        /// itself is flat, and serializes with the camelCase keys of the
        /// persisted payload.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct PrdData {
            $(#[serde(rename = $skey)] pub $sfield: String,)+
            $(#[serde(rename = $lkey)] pub $lfield: Vec<String>,)+
        }

        impl Default for PrdData {
            fn default() -> Self {
                Self {
                    $($sfield: String::new(),)+
                    $($lfield: vec![String::new(); $slots],)+
                }
            }
        }

        /// Every scalar (single string) field of the document.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ScalarField {
            $($svar,)+
        }

        impl ScalarField {
            pub const ALL: &'static [ScalarField] = &[$(ScalarField::$svar),+];

            pub fn key(&self) -> &'static str {
                match self {
                    $(ScalarField::$svar => $skey,)+
                }
            }
        }

        impl FromStr for ScalarField {
            type Err = PrdError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($skey => Ok(ScalarField::$svar),)+
                    other => Err(PrdError::UnknownField(other.to_string())),
                }
            }
        }

        /// Every ordered-list field of the document.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ListField {
            $($lvar,)+
        }

        impl ListField {
            pub const ALL: &'static [ListField] = &[$(ListField::$lvar),+];

            pub fn key(&self) -> &'static str {
                match self {
                    $(ListField::$lvar => $lkey,)+
                }
            }

            /// Number of blank entries the default state pre-seeds.
            pub fn default_slots(&self) -> usize {
                match self {
                    $(ListField::$lvar => $slots,)+
                }
            }
        }

        impl FromStr for ListField {
            type Err = PrdError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $($lkey => Ok(ListField::$lvar),)+
                    other => Err(PrdError::UnknownField(other.to_string())),
                }
            }
        }

        impl PrdData {
            pub fn scalar(&self, field: ScalarField) -> &str {
                match field {
                    $(ScalarField::$svar => &self.$sfield,)+
                }
            }

            pub fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
                match field {
                    $(ScalarField::$svar => &mut self.$sfield,)+
                }
            }

            pub fn list(&self, field: ListField) -> &[String] {
                match field {
                    $(ListField::$lvar => &self.$lfield,)+
                }
            }

            pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
                match field {
                    $(ListField::$lvar => &mut self.$lfield,)+
                }
            }
        }
    };
}

prd_fields! {
    scalars {
        ProjectName => project_name: "projectName",
        RoleTitle => role_title: "roleTitle",
        YearsExperience => years_experience: "yearsExperience",
        CompanyContext => company_context: "companyContext",
        FrameworkStack => framework_stack: "frameworkStack",
        Discipline => discipline: "discipline",

        PrimaryUserOutcome => primary_user_outcome: "primaryUserOutcome",
        CoreMechanism => core_mechanism: "coreMechanism",
        ExplicitNonGoal => explicit_non_goal: "explicitNonGoal",
        CoreValue => core_value: "coreValue",

        KeyBehavior => key_behavior: "keyBehavior",
        PainPoint => pain_point: "painPoint",
        ProblemContext => problem_context: "problemContext",

        FlowAction1 => flow_action_1: "flowAction1",
        FlowSystemResponse => flow_system_response: "flowSystemResponse",
        FlowAction2 => flow_action_2: "flowAction2",
        FlowSystemResult => flow_system_result: "flowSystemResult",
        FlowFinalConfirmation => flow_final_confirmation: "flowFinalConfirmation",
        FlowTimeExpectation => flow_time_expectation: "flowTimeExpectation",

        ScopeEntryPoint => scope_entry_point: "scopeEntryPoint",
        ScopeInteractionRule => scope_interaction_rule: "scopeInteractionRule",
        ScopeStructure => scope_structure: "scopeStructure",
        ScopeUserElements => scope_user_elements: "scopeUserElements",
        ScopeOutputFormat => scope_output_format: "scopeOutputFormat",
        ScopeStorage => scope_storage: "scopeStorage",
        ScopePlatforms => scope_platforms: "scopePlatforms",

        CoreFlowName => core_flow_name: "coreFlowName",
        CoreFlowEntryPoint => core_flow_entry_point: "coreFlowEntryPoint",
        CoreFlowInterface => core_flow_interface: "coreFlowInterface",
        CoreFlowInterfaceOptions => core_flow_interface_options: "coreFlowInterfaceOptions",
        CoreFlowConfirmation => core_flow_confirmation: "coreFlowConfirmation",

        SecondaryFlowName => secondary_flow_name: "secondaryFlowName",
        SecondaryNavigation => secondary_navigation: "secondaryNavigation",
        SecondaryLayout => secondary_layout: "secondaryLayout",
        SecondaryOrganisation => secondary_organisation: "secondaryOrganisation",

        TechFramework => tech_framework: "techFramework",
        TechStyling => tech_styling: "techStyling",
        TechStorage => tech_storage: "techStorage",

        CoreSkillArea => core_skill_area: "coreSkillArea",
        SynergyTooling => synergy_tooling: "synergyTooling",
        MicroInteractionOptional => micro_interaction_optional: "microInteractionOptional",

        ImplementationType => implementation_type: "implementationType",
        InstructionDiscipline => instruction_discipline: "instructionDiscipline",

        DesignDirection => design_direction: "designDirection",

        Hierarchy => hierarchy: "hierarchy",
        Contrast => contrast: "contrast",
        Balance => balance: "balance",
        Movement => movement: "movement",
        ComponentArchitecture => component_architecture: "componentArchitecture",

        PressStates => press_states: "pressStates",
        TransitionAnimations => transition_animations: "transitionAnimations",

        BestPractices => best_practices: "bestPractices",
        ModernFrameworkUsage => modern_framework_usage: "modernFrameworkUsage",
        ReusableComponents => reusable_components: "reusableComponents",
        PerformanceOptimization => performance_optimization: "performanceOptimization",
        Accessibility => accessibility: "accessibility",
    }
    lists {
        KeyFeatures => key_features: "keyFeatures", 2,
        CoreFlowOptions => core_flow_options: "coreFlowOptions", 3,
        OutOfScope => out_of_scope: "outOfScope", 4,
        CapabilityShowcase => capability_showcase: "capabilityShowcase", 4,
        InteractiveFeatures => interactive_features: "interactiveFeatures", 3,
        MicroInteractions => micro_interactions: "microInteractions", 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_field_key_roundtrip() {
        for field in ScalarField::ALL {
            assert_eq!(*field, field.key().parse().unwrap());
        }
    }

    #[test]
    fn list_field_key_roundtrip() {
        for field in ListField::ALL {
            assert_eq!(*field, field.key().parse().unwrap());
        }
    }

    #[test]
    fn unknown_field_is_an_error() {
        assert!("notAField".parse::<ScalarField>().is_err());
        assert!("projectName".parse::<ListField>().is_err());
    }

    #[test]
    fn default_data_seeds_list_slots() {
        let data = PrdData::default();
        for field in ListField::ALL {
            assert_eq!(data.list(*field).len(), field.default_slots());
            assert!(data.list(*field).iter().all(|item| item.is_empty()));
        }
        assert_eq!(data.key_features.len(), 2);
        assert_eq!(data.out_of_scope.len(), 4);
    }

    #[test]
    fn scalar_accessors_agree_with_struct_fields() {
        let mut data = PrdData::default();
        *data.scalar_mut(ScalarField::ProjectName) = "Mercury".to_string();
        assert_eq!(data.project_name, "Mercury");
        assert_eq!(data.scalar(ScalarField::ProjectName), "Mercury");
    }

    #[test]
    fn data_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(PrdData::default()).unwrap();
        assert!(json.get("projectName").is_some());
        assert!(json.get("keyFeatures").is_some());
        assert!(json.get("project_name").is_none());
    }

    #[test]
    fn partial_data_payload_fills_missing_fields() {
        let data: PrdData = serde_json::from_str(r#"{"projectName":"Mercury"}"#).unwrap();
        assert_eq!(data.project_name, "Mercury");
        assert_eq!(data.key_features, vec!["", ""]);
        assert_eq!(data.discipline, "");
    }

    #[test]
    fn section_order_is_fixed() {
        assert_eq!(SectionKey::ALL.len(), 14);
        assert_eq!(SectionKey::ALL[0], SectionKey::Role);
        assert_eq!(SectionKey::ALL[13], SectionKey::Constraints);
    }

    #[test]
    fn section_key_roundtrip() {
        for key in SectionKey::ALL {
            assert_eq!(*key, key.key().parse().unwrap());
        }
        assert!("adHoc".parse::<SectionKey>().is_err());
    }

    #[test]
    fn format_and_phrasing_parse() {
        assert_eq!("gdocs".parse::<Format>().unwrap(), Format::Gdocs);
        assert_eq!(
            "assisted".parse::<PhrasingMode>().unwrap(),
            PhrasingMode::Assisted
        );
        assert!("rtf".parse::<Format>().is_err());
    }
}
