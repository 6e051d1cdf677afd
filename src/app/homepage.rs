use leptos::prelude::*;
use leptos_meta::Title;

use super::{avatar::Avatar, contact::MessageForm, reveal::Reveal, tagline::RotatingTagline};
use crate::profile::{
    Section, ABOUT, EMAILS, GITHUB_URL, HACKATHONS, HEADLINE, HEADLINE_ACCENT, LINKEDIN_URL,
    LOCATION, PHONE, PITCH, PROJECTS, RESUME_FILE_NAME, RESUME_PATH, SKILLS,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <PageSection section=Section::About>
            <p class="leading-relaxed">{ABOUT}</p>
        </PageSection>
        <PageSection section=Section::Skills>
            <ul class="grid grid-cols-2 md:grid-cols-3 gap-2 list-disc list-inside">
                {SKILLS.iter().map(|skill| view! { <li>{*skill}</li> }).collect_view()}
            </ul>
        </PageSection>
        <PageSection section=Section::Projects>
            <Projects />
        </PageSection>
        <PageSection section=Section::Hackathons>
            <ul class="list-disc list-inside space-y-1">
                {HACKATHONS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </PageSection>
        <PageSection section=Section::Contact>
            <p class="text-sm">{format!("{LOCATION} · Phone: {PHONE}")}</p>
            <p class="text-sm">{format!("Email: {}", EMAILS.join(" / "))}</p>
            <MessageForm />
        </PageSection>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="container-max mx-auto px-6 pt-16 pb-10 grid md:grid-cols-[1.2fr,0.8fr] gap-10 items-center">
            <div>
                <h1 class="text-4xl md:text-5xl font-extrabold leading-tight text-primary-900 dark:text-white animate-fade-up">
                    {HEADLINE}
                    <span class="text-primary-600 dark:text-primary-400">" " {HEADLINE_ACCENT}</span>
                </h1>
                <RotatingTagline />
                <p class="mt-4 text-lg text-slate-700 dark:text-slate-300 max-w-2xl animate-fade-up-late">
                    {PITCH}
                </p>
                <div class="mt-6 flex flex-wrap gap-3">
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="primary-btn">
                        "GitHub"
                    </a>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" class="link-btn">
                        "LinkedIn"
                    </a>
                    <a href=RESUME_PATH download=RESUME_FILE_NAME class="link-btn">
                        "Resume"
                    </a>
                </div>
            </div>
            <div class="flex justify-center">
                <Avatar />
            </div>
        </section>
    }
}

#[component]
fn PageSection(section: Section, children: Children) -> impl IntoView {
    view! {
        <section id=section.anchor() class="container-max mx-auto px-6 py-16 scroll-mt-16">
            <Reveal>
                <h2 class="text-3xl md:text-4xl font-bold text-primary-800 dark:text-primary-300 mb-6">
                    {section.title()}
                </h2>
                <div class="text-slate-700 dark:text-slate-300">{children()}</div>
            </Reveal>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-6">
            {PROJECTS
                .iter()
                .map(|project| {
                    view! {
                        <div class="card">
                            <h3 class="font-semibold text-lg">{project.title}</h3>
                            {project
                                .url
                                .zip(project.display_url())
                                .map(|(url, text)| {
                                    view! {
                                        <a
                                            href=url
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="text-sm underline text-primary-700 dark:text-primary-300"
                                        >
                                            {text}
                                        </a>
                                    }
                                })}
                            <p class="mt-2 text-sm">{project.summary}</p>
                            <div class="mt-3 text-sm text-primary-700 dark:text-primary-300">
                                {format!("Tech: {}", project.tech)}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
