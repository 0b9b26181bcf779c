//! Google-Docs HTML renderer.
//!
//! Structurally parallel to the Markdown renderer (same section order, same
//! content) but emitting HTML tags suitable for pasting into Google Docs.
//! Every user-entered value is HTML-escaped on its way in: prose goes
//! through [`esc`], short inline interpolations through [`strong`], list
//! items are escaped before wrapping in `<li>`. Fixed template text is
//! emitted verbatim.

use super::{instruction_discipline_fallback, synergy_tooling_fallback};
use crate::model::{ScalarField as F, SectionKey};
use crate::phrasing::{list_or_empty, list_or_tbd, resolve};
use crate::state::PrdState;

/// Minimal HTML escaping for text nodes and attribute-free markup.
fn esc(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Escape user text and wrap it in `<strong>`.
fn strong(text: &str) -> String {
    format!("<strong>{}</strong>", esc(text))
}

/// Tag-level document builder; fragments are concatenated without separators.
#[derive(Default)]
struct Html(Vec<String>);

impl Html {
    fn h1(&mut self, text: &str) {
        self.0.push(format!("<h1>{}</h1>", esc(text)));
    }

    fn h2(&mut self, text: &str) {
        self.0.push(format!("<h2>{}</h2>", esc(text)));
    }

    fn h3(&mut self, text: &str) {
        self.0.push(format!("<h3>{}</h3>", esc(text)));
    }

    /// Paragraph from an already-escaped fragment.
    fn p(&mut self, text: &str) {
        self.0.push(format!("<p>{}</p>", text));
    }

    fn ul(&mut self, items: &[String]) {
        self.list("ul", items);
    }

    fn ol(&mut self, items: &[String]) {
        self.list("ol", items);
    }

    fn list(&mut self, tag: &str, items: &[String]) {
        let body: String = items
            .iter()
            .map(|item| format!("<li>{}</li>", item))
            .collect();
        self.0.push(format!("<{tag}>{body}</{tag}>"));
    }

    fn raw(&mut self, fragment: &str) {
        self.0.push(fragment.to_string());
    }

    fn finish(self) -> String {
        self.0.concat()
    }
}

pub fn render_gdocs(state: &PrdState) -> String {
    let data = &state.data;
    let phrasing = state.phrasing;
    let r = |field: F| resolve(data, field, phrasing, None);

    let mut html = Html::default();

    html.h1(&format!(
        "{} – Frontend Implementation Planning PRD",
        r(F::ProjectName)
    ));
    html.raw("<hr />");

    if state.enabled(SectionKey::Role) {
        html.h2("Role");
        html.p(&format!(
            "You are a {} with {} years of experience at {}.",
            strong(&r(F::RoleTitle)),
            strong(&r(F::YearsExperience)),
            strong(&r(F::CompanyContext))
        ));
        html.p("You possess deep judgement and technical insight into creating digital experiences that:");
        html.ul(&[
            "evoke emotion".to_string(),
            "enhance brand value".to_string(),
            "communicate quality through restraint and precision".to_string(),
        ]);
        html.p(&format!(
            "You excel at maximising the potential of {} to deliver results that are both aesthetically refined and technically robust.",
            strong(&r(F::FrameworkStack))
        ));
        html.p(&format!(
            "Your goal is to create implementations that go beyond simple features — delivering experiences that leave a strong, lasting impression and clearly demonstrate advanced {} capabilities.",
            strong(&r(F::Discipline))
        ));
    }

    if state.enabled(SectionKey::MvpGoal) {
        html.h2("MVP Goal");
        html.p(&format!(
            "Help users {} by {}.",
            strong(&r(F::PrimaryUserOutcome)),
            strong(&r(F::CoreMechanism))
        ));
        html.p("The product provides:");
        html.ul(
            &list_or_tbd(&data.key_features, phrasing)
                .iter()
                .map(|item| strong(item))
                .collect::<Vec<_>>(),
        );
        html.p(&format!(
            "The goal is not {}, but to {}.",
            strong(&r(F::ExplicitNonGoal)),
            strong(&r(F::CoreValue))
        ));
    }

    if state.enabled(SectionKey::TargetUser) {
        html.h2("Target User");
        html.p("Users who:");
        html.ul(&[
            strong(&r(F::KeyBehavior)),
            format!("struggle with {}", strong(&r(F::PainPoint))),
            format!("in the context of {}", strong(&r(F::ProblemContext))),
        ]);
    }

    if state.enabled(SectionKey::CoreFlow) {
        html.h2("Core Flow (Happy Path)");
        html.ol(&[
            format!("User {}", strong(&r(F::FlowAction1))),
            format!("The system {}", strong(&r(F::FlowSystemResponse))),
            format!("User {}", strong(&r(F::FlowAction2))),
            format!("System {}", strong(&r(F::FlowSystemResult))),
            format!("User {}", strong(&r(F::FlowFinalConfirmation))),
        ]);
        html.p("This flow must be:");
        html.ul(&[
            "fast".to_string(),
            "explicit".to_string(),
            format!("completable in {}", strong(&r(F::FlowTimeExpectation))),
        ]);
    }

    if state.enabled(SectionKey::Scope) {
        html.h2("MVP Scope (In)");
        html.ul(&[
            strong(&r(F::ScopeEntryPoint)),
            strong(&r(F::ScopeInteractionRule)),
            strong(&r(F::ScopeStructure)),
            strong(&r(F::ScopeUserElements)),
            strong(&r(F::ScopeOutputFormat)),
            strong(&r(F::ScopeStorage)),
            strong(&r(F::ScopePlatforms)),
        ]);
    }

    if state.enabled(SectionKey::Implementation) {
        html.h2("Implementation Details");
        html.h3(&r(F::CoreFlowName));
        html.ul(&[
            format!(
                "<strong>Entry Point</strong>: User enters via {}",
                strong(&r(F::CoreFlowEntryPoint))
            ),
            format!(
                "<strong>Interface</strong>: {} appears with {}",
                strong(&r(F::CoreFlowInterface)),
                strong(&r(F::CoreFlowInterfaceOptions))
            ),
            format!(
                "<strong>Options</strong>: {}",
                list_or_tbd(&data.core_flow_options, phrasing)
                    .iter()
                    .map(|item| strong(item))
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            format!(
                "<strong>Confirmation</strong>: After completion, the system asks {}",
                strong(&r(F::CoreFlowConfirmation))
            ),
        ]);
        html.h3(&r(F::SecondaryFlowName));
        html.ul(&[
            format!(
                "<strong>Navigation</strong>: {}",
                strong(&r(F::SecondaryNavigation))
            ),
            format!("<strong>Layout</strong>: {}", strong(&r(F::SecondaryLayout))),
            format!(
                "<strong>Organisation</strong>: Content grouped by {}",
                strong(&r(F::SecondaryOrganisation))
            ),
        ]);
        html.h3("Technology Stack");
        html.ul(&[
            format!("<strong>Framework</strong>: {}", strong(&r(F::TechFramework))),
            format!("<strong>Styling</strong>: {}", strong(&r(F::TechStyling))),
            format!("<strong>Storage</strong>: {}", strong(&r(F::TechStorage))),
        ]);
    }

    if state.enabled(SectionKey::OutOfScope) {
        html.h2("Explicitly Out of Scope");
        html.ul(
            &list_or_tbd(&data.out_of_scope, phrasing)
                .iter()
                .map(|item| strong(item))
                .collect::<Vec<_>>(),
        );
        html.p("This section is frozen. No features outside this scope should be implemented during MVP development.");
    }

    if state.enabled(SectionKey::Context) {
        html.h2("Context");
        html.p(&format!(
            "This project is an opportunity to demonstrate {} through how things are designed and implemented — not merely what features exist.",
            strong(&r(F::CoreSkillArea))
        ));
        html.p("Key considerations:");
        let optional_micro = list_or_empty(
            std::slice::from_ref(&data.micro_interaction_optional),
            phrasing,
        );
        let micro_note = match optional_micro.first() {
            Some(note) => format!("{} may be used where appropriate.", strong(note)),
            None => "Optional haptics / sound / animation may be used where appropriate.".to_string(),
        };
        html.ul(&[
            "<strong>Demonstrating Capability</strong>: The implementation should clearly reflect the maker’s level through code structure, interaction quality, design judgement, overall UX depth.".to_string(),
            "<strong>Core of User Experience (UX)</strong>: The product should feel intuitive, calm, satisfying. Thoughtful interactions and attention to detail should elevate perceived quality.".to_string(),
            format!(
                "<strong>Synergy of Tools & Frameworks</strong>: {} should be leveraged to build scalable systems, consistent patterns, maintainable structures while maintaining cross-platform or cross-context consistency.",
                strong(&resolve(
                    data,
                    F::SynergyTooling,
                    phrasing,
                    Some(&synergy_tooling_fallback(data))
                ))
            ),
            "<strong>Application of Design Principles</strong>: Hierarchy, Contrast, Balance, Movement should guide attention and clarify information — never be decorative.".to_string(),
            format!(
                "<strong>Power of Microinteractions</strong>: Subtle press states, transitions, motion, and feedback provide clarity, responsiveness, emotional quality. {}",
                micro_note
            ),
        ]);
    }

    if state.enabled(SectionKey::Instruction) {
        html.h2("Instruction");
        html.p(&format!(
            "Generate {} guidelines that demonstrate strong {} and interaction design capabilities.",
            strong(&r(F::ImplementationType)),
            strong(&resolve(
                data,
                F::InstructionDiscipline,
                phrasing,
                Some(&instruction_discipline_fallback(data))
            ))
        ));
        html.ul(&[
            "Do not generate a complete application.".to_string(),
            "Focus on planning, structure, and representative components.".to_string(),
        ]);
        html.p("Follow the sections below carefully.");
    }

    if state.enabled(SectionKey::Vision) {
        html.h2("1. Define Project Vision and Core Concepts");
        html.h3("Set Goals");
        html.p("Clearly define which capabilities this project is intended to showcase:");
        html.ul(
            &list_or_tbd(&data.capability_showcase, phrasing)
                .iter()
                .map(|item| strong(item))
                .collect::<Vec<_>>(),
        );
        html.h3("Theme and Concept");
        html.p("Propose an original visual and interaction concept, such as:");
        html.ul(&[strong(&r(F::DesignDirection))]);
    }

    if state.enabled(SectionKey::DesignPrinciples) {
        html.h2("2. Design Structure Based on Design Principles");
        html.h3("Hierarchy");
        html.p(&esc(&r(F::Hierarchy)));
        html.h3("Contrast");
        html.p(&esc(&r(F::Contrast)));
        html.h3("Balance");
        html.p(&esc(&r(F::Balance)));
        html.h3("Movement");
        html.p(&esc(&r(F::Movement)));
        html.h3("Component-Based Architecture");
        html.p(&esc(&r(F::ComponentArchitecture)));
    }

    if state.enabled(SectionKey::UxDetails) {
        html.h2("3. Implement Interactive Features and Detailed UX Elements");
        html.h3("Interactive Features");
        html.ul(
            &list_or_tbd(&data.interactive_features, phrasing)
                .iter()
                .map(|item| esc(item))
                .collect::<Vec<_>>(),
        );
        html.h3("Press / Touch States");
        html.p(&esc(&r(F::PressStates)));
        html.h3("Transition Animations");
        html.p(&esc(&r(F::TransitionAnimations)));
        html.h3("Microinteractions");
        html.ul(
            &list_or_tbd(&data.micro_interactions, phrasing)
                .iter()
                .map(|item| esc(item))
                .collect::<Vec<_>>(),
        );
    }

    if state.enabled(SectionKey::CodeQuality) {
        html.h2("4. Code Quality and Performance Optimisation");
        html.h3("Best Practices");
        html.p(&esc(&r(F::BestPractices)));
        html.h3("Modern Framework Usage");
        html.p(&esc(&r(F::ModernFrameworkUsage)));
        html.h3("Reusable Components");
        html.p(&esc(&r(F::ReusableComponents)));
        html.h3("Performance Optimisation");
        html.p(&esc(&r(F::PerformanceOptimization)));
        html.h3("Accessibility");
        html.p(&esc(&r(F::Accessibility)));
    }

    if state.enabled(SectionKey::Constraints) {
        html.h2("Constraints");
        html.ul(&[
            "Do not generate full application code.".to_string(),
            "All design principles must be reflected in implementation decisions.".to_string(),
            "All UX elements must be intentional and explained.".to_string(),
            "Code must be readable, maintainable, and extensible.".to_string(),
            "Introduce a clear wow factor without unnecessary complexity.".to_string(),
            "The final output should feel premium, calm, and confident.".to_string(),
        ]);
    }

    html.finish()
}
