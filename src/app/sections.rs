use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    portfolio::{
        Project, Skill, ABOUT, BUILD_YEAR, CONTACT_DETAILS, PROFILE, PROJECTS, SKILLS,
        SOCIAL_LINKS, STATS,
    },
    section::Section,
};

#[component]
fn SectionTitle(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-3xl sm:text-4xl font-bold text-center mb-12 text-cyan-600 dark:text-cyan-400">
            {text}
        </h2>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <SectionTitle text="About Me" />
                <Reveal>
                    {ABOUT
                        .iter()
                        .map(|p| view! { <p class="text-lg leading-relaxed mb-4">{*p}</p> })
                        .collect_view()}
                </Reveal>
                <Reveal class="grid grid-cols-1 sm:grid-cols-3 gap-6 mt-10">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center p-6 rounded-lg bg-slate-100 dark:bg-slate-800">
                                    <h3 class="text-3xl font-bold text-cyan-600 dark:text-cyan-400">
                                        {stat.value}
                                    </h3>
                                    <p class="text-sm mt-2">{stat.caption}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    view! {
        <div class="mb-2">
            <div class="flex justify-between mb-1 font-medium">
                <span>{skill.name}</span>
                <span class="text-cyan-600 dark:text-cyan-400">{format!("{}%", skill.level)}</span>
            </div>
            <div class="h-2 rounded-full bg-slate-200 dark:bg-slate-700 overflow-hidden">
                <div class="skill-progress h-full rounded-full bg-cyan-500" style=skill.width()></div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 px-4 bg-slate-50 dark:bg-slate-800/50">
            <div class="max-w-4xl mx-auto">
                <SectionTitle text="Skills & Technologies" />
                <Reveal class="grid grid-cols-1 md:grid-cols-2 gap-x-12 gap-y-6">
                    {SKILLS.iter().map(|skill| view! { <SkillBar skill=*skill /> }).collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <Reveal class="rounded-lg overflow-hidden shadow-lg bg-white dark:bg-slate-800 group">
            <div class="relative">
                <img src=project.image alt=project.title class="w-full h-48 object-cover" />
                <div class="absolute inset-0 flex items-center justify-center bg-slate-900/70 opacity-0 group-hover:opacity-100 transition-opacity duration-200">
                    <a
                        href=project.link
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-4 py-2 rounded-md bg-cyan-600 text-white font-medium"
                    >
                        "View Project"
                    </a>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="mb-4 text-slate-600 dark:text-slate-300">{project.description}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-2 py-1 text-xs rounded-full bg-cyan-600/10 text-cyan-700 dark:text-cyan-300">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionTitle text="Featured Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=*project /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let input_class = "w-full px-4 py-2 rounded-md border border-slate-300 dark:border-slate-600 bg-transparent focus:outline-none focus:ring-2 focus:ring-cyan-500";

    view! {
        <section id=Section::Contact.id() class="py-20 px-4 bg-slate-50 dark:bg-slate-800/50">
            <div class="max-w-6xl mx-auto">
                <SectionTitle text="Get In Touch" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <Reveal>
                        <h3 class="text-2xl font-bold mb-4">"Let's work together"</h3>
                        <p class="mb-6 leading-relaxed">
                            "I'm always interested in hearing about new opportunities and projects. Whether you have a question or just want to say hi, feel free to reach out!"
                        </p>
                        <div class="space-y-2 mb-6">
                            {CONTACT_DETAILS
                                .iter()
                                .map(|detail| {
                                    view! {
                                        <div>
                                            <strong>{detail.label} ":"</strong>
                                            " "
                                            {detail.value}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex gap-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="font-medium text-cyan-600 dark:text-cyan-400 hover:underline"
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                    <Reveal>
                        // presentational only, nothing is sent anywhere
                        <form
                            class="space-y-4"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                log::debug!("contact form submitted; no endpoint configured");
                            }
                        >
                            <input type="text" placeholder="Your Name" required class=input_class />
                            <input type="email" placeholder="Your Email" required class=input_class />
                            <input type="text" placeholder="Subject" required class=input_class />
                            <textarea placeholder="Your Message" rows="5" required class=input_class></textarea>
                            <button
                                type="submit"
                                class="px-6 py-3 rounded-md font-medium bg-cyan-600 hover:bg-cyan-700 text-white transition-all duration-200"
                            >
                                "Send Message"
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-6 text-center text-sm border-t border-slate-200 dark:border-slate-700">
            <p>{format!("© {BUILD_YEAR} {}. All rights reserved.", PROFILE.name)}</p>
        </footer>
    }
}
