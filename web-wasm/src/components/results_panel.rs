//! 解析結果表示コンポーネント
//!
//! 各セクションは独立して描画し、空ならプレースホルダ文言を出す。

use crate::components::confidence_bar::ConfidenceBar;
use leptos::either::Either;
use leptos::prelude::*;
use resume_parser_common::view::{ContactRow, EducationCard, ExperienceCard};
use resume_parser_common::{ResumeView, Section};

#[component]
pub fn ResultsPanel(resume: Memo<Option<ResumeView>>) -> impl IntoView {
    view! {
        <div class="results-panel">
            {move || resume.get().map(|resume| view! {
                <ConfidenceBar confidence=resume.confidence />
                <div class="results-grid">
                    <div class="card">
                        <h3>"Personal Information"</h3>
                        <div class="contact-list">
                            {resume.contacts.into_iter().map(contact_row).collect_view()}
                        </div>
                    </div>
                    <div class="card">
                        <h3>"Skills"</h3>
                        <div class="skill-list">
                            {section_body(resume.skills, |skill| view! {
                                <span class="skill-chip">{skill}</span>
                            })}
                        </div>
                    </div>
                    <div class="card">
                        <h3>"Experience"</h3>
                        <div class="entry-list">
                            {section_body(resume.experience, experience_entry)}
                        </div>
                    </div>
                    <div class="card">
                        <h3>"Education"</h3>
                        <div class="entry-list">
                            {section_body(resume.education, education_entry)}
                        </div>
                    </div>
                    <div class="card">
                        <h3>"Projects"</h3>
                        <div class="bullet-list">
                            {section_body(resume.projects, |project| view! {
                                <div class="bullet project"><span class="bullet-icon">"◆"</span><p>{project}</p></div>
                            })}
                        </div>
                    </div>
                    <div class="card">
                        <h3>"Certifications"</h3>
                        <div class="bullet-list">
                            {section_body(resume.certifications, |cert| view! {
                                <div class="bullet certification"><span class="bullet-icon">"★"</span><p>{cert}</p></div>
                            })}
                        </div>
                    </div>
                </div>
            })}
        </div>
    }
}

fn section_body<T, V>(section: Section<T>, render: impl Fn(T) -> V) -> impl IntoView
where
    V: IntoView,
{
    match section {
        Section::Empty(placeholder) => Either::Left(view! { <p class="text-muted">{placeholder}</p> }),
        Section::Items(items) => Either::Right(items.into_iter().map(render).collect_view()),
    }
}

fn contact_row(row: ContactRow) -> impl IntoView {
    view! {
        <div class="contact-row">
            <span class="contact-icon">{row.icon}</span>
            <span class="contact-label">{format!("{}:", row.label)}</span>
            <span class="contact-value">{row.value}</span>
        </div>
    }
}

fn experience_entry(card: ExperienceCard) -> impl IntoView {
    view! {
        <div class="entry experience">
            <h4>{card.role}</h4>
            <p>{card.company}</p>
            <p class="text-muted">{card.dates}</p>
        </div>
    }
}

fn education_entry(card: EducationCard) -> impl IntoView {
    view! {
        <div class="entry education">
            <h4>{card.degree}</h4>
            <p>{card.institution}</p>
            <p class="text-muted">{card.year}</p>
        </div>
    }
}
