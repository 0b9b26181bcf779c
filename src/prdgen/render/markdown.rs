//! Markdown renderer. Notion output is defined as identical to Markdown.

use super::{instruction_discipline_fallback, synergy_tooling_fallback};
use crate::model::{ScalarField as F, SectionKey};
use crate::phrasing::{list_or_empty, list_or_tbd, resolve};
use crate::state::PrdState;

/// Line accumulator joined with newlines at the end.
#[derive(Default)]
struct Lines(Vec<String>);

impl Lines {
    fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    fn blank(&mut self) {
        self.0.push(String::new());
    }

    fn heading(&mut self, text: &str) {
        self.push(text);
        self.blank();
    }

    fn finish(self) -> String {
        self.0.join("\n")
    }
}

pub fn render_markdown(state: &PrdState) -> String {
    let data = &state.data;
    let phrasing = state.phrasing;
    let r = |field: F| resolve(data, field, phrasing, None);

    let mut lines = Lines::default();

    lines.push(format!(
        "# {} – Frontend Implementation Planning PRD",
        r(F::ProjectName)
    ));
    lines.blank();
    lines.push("---");
    lines.blank();

    if state.enabled(SectionKey::Role) {
        lines.heading("## Role");
        lines.push(format!(
            "You are a **{}** with **{}** years of experience at **{}**.",
            r(F::RoleTitle),
            r(F::YearsExperience),
            r(F::CompanyContext)
        ));
        lines.blank();
        lines.push(
            "You possess deep judgement and technical insight into creating digital experiences that:",
        );
        lines.blank();
        lines.push("* evoke emotion");
        lines.push("* enhance brand value");
        lines.push("* communicate quality through restraint and precision");
        lines.blank();
        lines.push(format!(
            "You excel at maximising the potential of **{}** to deliver results that are both aesthetically refined and technically robust.",
            r(F::FrameworkStack)
        ));
        lines.blank();
        lines.push("Your goal is to create implementations that go beyond simple features —");
        lines.push(
            "delivering experiences that leave a strong, lasting impression and clearly demonstrate",
        );
        lines.push(format!("advanced **{}** capabilities.", r(F::Discipline)));
        lines.blank();
    }

    if state.enabled(SectionKey::MvpGoal) {
        lines.heading("## MVP Goal");
        lines.push(format!("Help users **{}**", r(F::PrimaryUserOutcome)));
        lines.push(format!("by **{}**.", r(F::CoreMechanism)));
        lines.blank();
        lines.push("The product provides:");
        lines.blank();
        for feature in list_or_tbd(&data.key_features, phrasing) {
            lines.push(format!("* **{}**", feature));
        }
        lines.blank();
        lines.push(format!("The goal is **not** **{}**,", r(F::ExplicitNonGoal)));
        lines.push(format!("but to **{}**.", r(F::CoreValue)));
        lines.blank();
    }

    if state.enabled(SectionKey::TargetUser) {
        lines.heading("## Target User");
        lines.push("Users who:");
        lines.blank();
        lines.push(format!("* **{}**", r(F::KeyBehavior)));
        lines.push(format!("* struggle with **{}**", r(F::PainPoint)));
        lines.push(format!("* in the context of **{}**", r(F::ProblemContext)));
        lines.blank();
    }

    if state.enabled(SectionKey::CoreFlow) {
        lines.heading("## Core Flow (Happy Path)");
        lines.push(format!("1. User **{}**", r(F::FlowAction1)));
        lines.push(format!("2. The system **{}**", r(F::FlowSystemResponse)));
        lines.push(format!("3. User **{}**", r(F::FlowAction2)));
        lines.push(format!("4. System **{}**", r(F::FlowSystemResult)));
        lines.push(format!("5. User **{}**", r(F::FlowFinalConfirmation)));
        lines.blank();
        lines.push("This flow must be:");
        lines.blank();
        lines.push("* fast");
        lines.push("* explicit");
        lines.push(format!(
            "* completable in **{}**",
            r(F::FlowTimeExpectation)
        ));
        lines.blank();
    }

    if state.enabled(SectionKey::Scope) {
        lines.heading("## MVP Scope (In)");
        lines.push(format!("* **{}**", r(F::ScopeEntryPoint)));
        lines.push(format!("* **{}**", r(F::ScopeInteractionRule)));
        lines.push(format!("* **{}**", r(F::ScopeStructure)));
        lines.push(format!("* **{}**", r(F::ScopeUserElements)));
        lines.push(format!("* **{}**", r(F::ScopeOutputFormat)));
        lines.push(format!("* **{}**", r(F::ScopeStorage)));
        lines.push(format!("* **{}**", r(F::ScopePlatforms)));
        lines.blank();
    }

    if state.enabled(SectionKey::Implementation) {
        lines.heading("## Implementation Details");
        lines.heading(&format!("### {}", r(F::CoreFlowName)));
        lines.push("* **Entry Point**:");
        lines.push(format!(
            "  User enters via **{}**",
            r(F::CoreFlowEntryPoint)
        ));
        lines.blank();
        lines.push("* **Interface**:");
        lines.push(format!(
            "  **{}** appears with **{}**",
            r(F::CoreFlowInterface),
            r(F::CoreFlowInterfaceOptions)
        ));
        lines.blank();
        lines.push("* **Options**:");
        for option in list_or_tbd(&data.core_flow_options, phrasing) {
            lines.push(format!("  * **{}**", option));
        }
        lines.blank();
        lines.push("* **Confirmation**:");
        lines.push(format!(
            "  After completion, the system asks **{}**",
            r(F::CoreFlowConfirmation)
        ));
        lines.blank();
        lines.heading(&format!("### {}", r(F::SecondaryFlowName)));
        lines.push("* **Navigation**:");
        lines.push(format!("  **{}**", r(F::SecondaryNavigation)));
        lines.blank();
        lines.push("* **Layout**:");
        lines.push(format!("  **{}**", r(F::SecondaryLayout)));
        lines.blank();
        lines.push("* **Organisation**:");
        lines.push(format!(
            "  Content grouped by **{}**",
            r(F::SecondaryOrganisation)
        ));
        lines.blank();
        lines.heading("### Technology Stack");
        lines.push(format!("* **Framework**: {}", r(F::TechFramework)));
        lines.push(format!("* **Styling**: {}", r(F::TechStyling)));
        lines.push(format!("* **Storage**: {}", r(F::TechStorage)));
        lines.blank();
    }

    if state.enabled(SectionKey::OutOfScope) {
        lines.heading("## Explicitly Out of Scope");
        for item in list_or_tbd(&data.out_of_scope, phrasing) {
            lines.push(format!("* **{}**", item));
        }
        lines.blank();
        lines.push("> This section is frozen.");
        lines.push("> No features outside this scope should be implemented during MVP development.");
        lines.blank();
    }

    if state.enabled(SectionKey::Context) {
        lines.heading("## Context");
        lines.push(format!(
            "This project is an opportunity to demonstrate **{}** through",
            r(F::CoreSkillArea)
        ));
        lines.push("how things are designed and implemented — not merely *what* features exist.");
        lines.blank();
        lines.push("Key considerations:");
        lines.blank();
        lines.push("* **Demonstrating Capability**");
        lines.push("  The implementation should clearly reflect the maker’s level through:");
        lines.push("  * code structure");
        lines.push("  * interaction quality");
        lines.push("  * design judgement");
        lines.push("  * overall UX depth");
        lines.blank();
        lines.push("* **Core of User Experience (UX)**");
        lines.push("  The product should feel:");
        lines.push("  * intuitive");
        lines.push("  * calm");
        lines.push("  * satisfying");
        lines.push("    Thoughtful interactions and attention to detail should elevate perceived quality.");
        lines.blank();
        lines.push("* **Synergy of Tools & Frameworks**");
        lines.push(format!(
            "  **{}** should be leveraged to build:",
            resolve(
                data,
                F::SynergyTooling,
                phrasing,
                Some(&synergy_tooling_fallback(data))
            )
        ));
        lines.push("  * scalable systems");
        lines.push("  * consistent patterns");
        lines.push("  * maintainable structures");
        lines.push("    while maintaining cross-platform or cross-context consistency.");
        lines.blank();
        lines.push("* **Application of Design Principles**");
        lines.push("  Principles such as:");
        lines.push("  * Hierarchy");
        lines.push("  * Contrast");
        lines.push("  * Balance");
        lines.push("  * Movement");
        lines.push("    should guide attention and clarify information — never be decorative.");
        lines.blank();
        lines.push("* **Power of Microinteractions**");
        lines.push("  Subtle press states, transitions, motion, and feedback provide:");
        lines.push("  * clarity");
        lines.push("  * responsiveness");
        lines.push("  * emotional quality");
        let optional_micro = list_or_empty(
            std::slice::from_ref(&data.micro_interaction_optional),
            phrasing,
        );
        match optional_micro.first() {
            Some(note) => {
                lines.push(format!("    **{}** may be used where appropriate.", note));
            }
            None => {
                lines.push(
                    "    **[OPTIONAL: haptics / sound / animation]** may be used where appropriate.",
                );
            }
        }
        lines.blank();
    }

    if state.enabled(SectionKey::Instruction) {
        lines.heading("## Instruction");
        lines.push(format!(
            "Generate **{}** guidelines that demonstrate",
            r(F::ImplementationType)
        ));
        lines.push(format!(
            "strong **{}** and interaction design capabilities.",
            resolve(
                data,
                F::InstructionDiscipline,
                phrasing,
                Some(&instruction_discipline_fallback(data))
            )
        ));
        lines.blank();
        lines.push("* Do **not** generate a complete application.");
        lines.push("* Focus on planning, structure, and representative components.");
        lines.blank();
        lines.push("Follow the sections below carefully.");
        lines.blank();
    }

    if state.enabled(SectionKey::Vision) {
        lines.heading("## 1. Define Project Vision and Core Concepts");
        lines.heading("### Set Goals");
        lines.push("Clearly define which capabilities this project is intended to showcase:");
        lines.blank();
        for capability in list_or_tbd(&data.capability_showcase, phrasing) {
            lines.push(format!("* **{}**", capability));
        }
        lines.blank();
        lines.heading("### Theme and Concept");
        lines.push("Propose an original visual and interaction concept, such as:");
        lines.blank();
        lines.push(format!("* **{}**", r(F::DesignDirection)));
        lines.blank();
    }

    if state.enabled(SectionKey::DesignPrinciples) {
        lines.heading("## 2. Design Structure Based on Design Principles");
        lines.heading("### Hierarchy");
        lines.push(r(F::Hierarchy));
        lines.blank();
        lines.heading("### Contrast");
        lines.push(r(F::Contrast));
        lines.blank();
        lines.heading("### Balance");
        lines.push(r(F::Balance));
        lines.blank();
        lines.heading("### Movement");
        lines.push(r(F::Movement));
        lines.blank();
        lines.heading("### Component-Based Architecture");
        lines.push(r(F::ComponentArchitecture));
        lines.blank();
    }

    if state.enabled(SectionKey::UxDetails) {
        lines.heading("## 3. Implement Interactive Features and Detailed UX Elements");
        lines.heading("### Interactive Features");
        for feature in list_or_tbd(&data.interactive_features, phrasing) {
            lines.push(format!("* {}", feature));
        }
        lines.blank();
        lines.heading("### Press / Touch States");
        lines.push(r(F::PressStates));
        lines.blank();
        lines.heading("### Transition Animations");
        lines.push(r(F::TransitionAnimations));
        lines.blank();
        lines.heading("### Microinteractions");
        for item in list_or_tbd(&data.micro_interactions, phrasing) {
            lines.push(format!("* {}", item));
        }
        lines.blank();
    }

    if state.enabled(SectionKey::CodeQuality) {
        lines.heading("## 4. Code Quality and Performance Optimisation");
        lines.heading("### Best Practices");
        lines.push(r(F::BestPractices));
        lines.blank();
        lines.heading("### Modern Framework Usage");
        lines.push(r(F::ModernFrameworkUsage));
        lines.blank();
        lines.heading("### Reusable Components");
        lines.push(r(F::ReusableComponents));
        lines.blank();
        lines.heading("### Performance Optimisation");
        lines.push(r(F::PerformanceOptimization));
        lines.blank();
        lines.heading("### Accessibility");
        lines.push(r(F::Accessibility));
        lines.blank();
    }

    if state.enabled(SectionKey::Constraints) {
        lines.heading("## Constraints");
        lines.push("* Do not generate full application code.");
        lines.push("* All design principles must be reflected in implementation decisions.");
        lines.push("* All UX elements must be intentional and explained.");
        lines.push("* Code must be readable, maintainable, and extensible.");
        lines.push("* Introduce a clear “wow” factor without unnecessary complexity.");
        lines.push("* The final output should feel **premium, calm, and confident**.");
        lines.blank();
    }

    lines.finish()
}

/// Notion-flavored output is deliberately identical to Markdown. Keep this
/// an alias so the two can never drift apart.
pub fn render_notion(state: &PrdState) -> String {
    render_markdown(state)
}
