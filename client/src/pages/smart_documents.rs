//! Smart loan documents: the credit agreement in legal and logic form.
//!
//! SYSTEM CONTEXT
//! ==============
//! One agreement is shown two ways. The legal view renders the article text;
//! the logic view renders the same covenants as structured programs. The
//! programs are display-only and are never evaluated.

#[cfg(test)]
#[path = "smart_documents_test.rs"]
mod smart_documents_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::benefit_card::{Benefit, BenefitGrid};
use crate::components::callout::Callout;
use crate::components::icon::{Icon, IconKind};
use crate::components::page_header::PageHeader;
use crate::domain::{CovenantProgram, ProgramField, ProgramValue};
use crate::mock;
use crate::state::ui::{DocumentMode, UiState};
use crate::util::tone::{Tone, clause_tone};

static BENEFITS: [Benefit; 3] = [
    Benefit {
        icon: IconKind::Check,
        tone: Tone::Info,
        title: "Manual Process Eliminated",
        body: "Contract terms are monitored automatically, eliminating manual covenant tracking",
    },
    Benefit {
        icon: IconKind::Check,
        tone: Tone::Eco,
        title: "Real-Time Compliance",
        body: "Covenant status is continuously evaluated against live financial data",
    },
    Benefit {
        icon: IconKind::Check,
        tone: Tone::Accent,
        title: "Audit-Ready Documentation",
        body: "All contract logic and execution history is transparent and verifiable",
    },
];

/// Source text of a program literal: strings quoted, numbers and booleans bare.
pub fn value_literal(value: ProgramValue) -> String {
    match value {
        ProgramValue::Text(text) => format!("\"{text}\""),
        ProgramValue::Number(number) => number.to_owned(),
        ProgramValue::Bool(flag) => flag.to_string(),
    }
}

/// Syntax-highlight class for a program literal.
pub fn value_class(value: ProgramValue) -> &'static str {
    match value {
        ProgramValue::Text(_) => "code__string",
        ProgramValue::Number(_) => "code__number",
        ProgramValue::Bool(_) => "code__keyword",
    }
}

pub fn program_header(program: &CovenantProgram) -> String {
    format!("covenant {} {{", program.ident)
}

#[component]
pub fn SmartDocumentsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let mode = Memo::new(move |_| ui.get().document_mode);

    let toggle = move |target: DocumentMode, icon: IconKind| {
        view! {
            <button
                class="toggle__item"
                class:toggle__item--active=move || mode.get() == target
                on:click=move |_| {
                    ui.update(|u| u.set_document_mode(target));
                    #[cfg(feature = "hydrate")]
                    log::debug!("document mode: {}", target.label());
                }
            >
                <Icon kind=icon/>
                <span>{target.label()}</span>
            </button>
        }
    };

    view! {
        <div class="page">
            <PageHeader
                title="Smart Loan Documents"
                subtitle="Machine-readable contracts with human-readable legal text"
            />

            <section class="card card--flush">
                <div class="doc__head">
                    <div>
                        <h2 class="card__title">"Senior Secured Credit Agreement - TechCorp Industries Ltd."</h2>
                        <p class="muted">"Loan ID: LN-2024-001 • Executed: February 15, 2023"</p>
                    </div>
                    <div class="toggle">
                        {toggle(DocumentMode::Legal, IconKind::File)}
                        {toggle(DocumentMode::Logic, IconKind::Code)}
                    </div>
                </div>
                {move || match mode.get() {
                    DocumentMode::Legal => view! { <LegalView/> }.into_any(),
                    DocumentMode::Logic => view! { <LogicView/> }.into_any(),
                }}
            </section>

            <BenefitGrid benefits=&BENEFITS/>
        </div>
    }
}

#[component]
fn LegalView() -> impl IntoView {
    view! {
        <div class="doc__body">
            {mock::credit_agreement()
                .iter()
                .map(|article| {
                    view! {
                        <div class="article">
                            <h3 class="article__heading">{article.heading}</h3>
                            {article
                                .sections
                                .iter()
                                .map(|section| {
                                    view! {
                                        <p class=format!("article__section {}", section.accent.class())>
                                            <strong>{section.title}</strong>
                                            " "
                                            {section.body}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
            <Callout icon=IconKind::Check tone=Tone::Info title="Beyond PDFs">
                "This legal text is simultaneously represented in machine-readable format, \
                 enabling automated monitoring, enforcement, and compliance verification. \
                 Switch to Logic View to see the executable representation."
            </Callout>
        </div>
    }
}

#[component]
fn LogicView() -> impl IntoView {
    view! {
        <div class="doc__body">
            <div class="code">
                <div class="code__comment">"// Financial Covenants - Machine Executable Logic"</div>
                {mock::covenant_programs().iter().map(|program| view! { <ProgramBlock program=program/> }).collect_view()}
            </div>
            <div class="grid grid--2">
                <Callout icon=IconKind::Check tone=Tone::Positive title="Machine-Readable Format">
                    "Contract logic is represented in structured, executable format enabling \
                     real-time monitoring and automated enforcement."
                </Callout>
                <Callout icon=IconKind::Warning tone=Tone::Info title="Legal Certainty">
                    "Logic view is derived directly from legal text, ensuring consistency \
                     between human and machine interpretation."
                </Callout>
            </div>
        </div>
    }
}

#[component]
fn ProgramBlock(program: &'static CovenantProgram) -> impl IntoView {
    let accent = format!("code__ident {}", program.tone.class());
    let id_field = ProgramField { key: "id", value: ProgramValue::Text(program.clause_id) };
    let name_field = ProgramField { key: "name", value: ProgramValue::Text(program.name) };
    view! {
        <div class="code__block">
            <div class=accent.clone()>{program_header(program)}</div>
            <div class="code__indent">
                <FieldLine field=id_field/>
                <FieldLine field=name_field/>
                <div>
                    "status: "
                    <span class=format!("code__status {}", clause_tone(program.status).class())>
                        {program.status.keyword()}
                    </span>
                </div>
                <div class="code__gap">"condition: {"</div>
                <div class="code__indent">
                    {program.condition.iter().map(|field| view! { <FieldLine field=field.clone()/> }).collect_view()}
                </div>
                <div>"}"</div>
                <div class="code__gap">"actions: ["</div>
                <div class="code__indent">
                    {program
                        .actions
                        .iter()
                        .enumerate()
                        .map(|(i, action)| {
                            let trailing = if i + 1 < program.actions.len() { " }," } else { " }" };
                            view! {
                                <div>
                                    "{ type: "
                                    <span class="code__string">{value_literal(ProgramValue::Text(action.kind))}</span>
                                    {action
                                        .params
                                        .iter()
                                        .map(|param| {
                                            view! {
                                                ", "
                                                {param.key}
                                                ": "
                                                <span class=value_class(param.value)>{value_literal(param.value)}</span>
                                            }
                                        })
                                        .collect_view()}
                                    {trailing}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div>"]"</div>
            </div>
            <div class=accent>"}"</div>
        </div>
    }
}

#[component]
fn FieldLine(field: ProgramField) -> impl IntoView {
    view! {
        <div>
            {field.key}
            ": "
            <span class=value_class(field.value)>{value_literal(field.value)}</span>
        </div>
    }
}
