//! About page: mission, team and contact.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::reveal::ScrollReveal;
use crate::config::reveal::GRID_STAGGER_MS;
use crate::config::{CONTACT_EMAIL, SITE_NAME};
use crate::core::Animation;
use crate::data::{MISSION, TEAM};
use crate::models::{MissionPillar, TeamMember};
use crate::utils::format::{initials, stagger};

stylance::import_crate_style!(css, "src/pages/about.module.css");

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class=css::header>
            <ScrollReveal animation=Animation::FadeDown>
                <h1 class=css::title>{format!("About {}", SITE_NAME)}</h1>
            </ScrollReveal>
            <ScrollReveal animation=Animation::FadeUp delay=200>
                <p class=css::lead>
                    "We're a team of passionate developers sharing knowledge, experiences and stories from the world of software engineering."
                </p>
            </ScrollReveal>
        </section>

        <section class=css::section>
            <ScrollReveal animation=Animation::FadeUp>
                <h2 class=css::heading>"Our Mission"</h2>
            </ScrollReveal>
            <div class=css::missionGrid>
                {MISSION
                    .iter()
                    .enumerate()
                    .map(|(i, pillar)| view! { <Pillar pillar=*pillar index=i /> })
                    .collect_view()}
            </div>
        </section>

        <section class=css::section>
            <ScrollReveal animation=Animation::FadeUp>
                <h2 class=css::heading>"Meet the Team"</h2>
            </ScrollReveal>
            <div class=css::teamGrid>
                {TEAM
                    .iter()
                    .enumerate()
                    .map(|(i, member)| view! { <MemberCard member=*member index=i /> })
                    .collect_view()}
            </div>
        </section>

        <section class=css::section>
            <ScrollReveal animation=Animation::Scale>
                <div class=css::contact>
                    <h2 class=css::heading>"Get in Touch"</h2>
                    <p class=css::lead>
                        "Have a story to share or a topic you'd like us to cover? We'd love to hear from you."
                    </p>
                    <a class=css::contactButton href=format!("mailto:{}", CONTACT_EMAIL)>
                        <Icon icon=ic::MAIL />
                        "Contact Us"
                    </a>
                </div>
            </ScrollReveal>
        </section>
    }
}

#[component]
fn Pillar(pillar: MissionPillar, index: usize) -> impl IntoView {
    view! {
        <ScrollReveal animation=Animation::FadeUp delay=stagger(0, index, GRID_STAGGER_MS * 2)>
            <div class=css::card>
                <div class=css::pillarIcon aria-hidden="true">{pillar.icon}</div>
                <h3 class=css::cardTitle>{pillar.title}</h3>
                <p class=css::muted>{pillar.description}</p>
            </div>
        </ScrollReveal>
    }
}

#[component]
fn MemberCard(member: TeamMember, index: usize) -> impl IntoView {
    let animation = if index % 2 == 0 {
        Animation::FadeRight
    } else {
        Animation::FadeLeft
    };

    view! {
        <ScrollReveal animation=animation delay=stagger(0, index, GRID_STAGGER_MS * 2)>
            <div class=css::card>
                <div class=css::avatar>{initials(member.name)}</div>
                <h3 class=css::cardTitle>{member.name}</h3>
                <p class=css::role>{member.role}</p>
                <p class=css::muted>{member.bio}</p>
                <ul class=css::skills>
                    {member
                        .skills
                        .iter()
                        .map(|skill| view! { <li class=css::skill>{*skill}</li> })
                        .collect_view()}
                </ul>
                <div class=css::social>
                    <a href=member.github target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        <Icon icon=ic::GITHUB />
                    </a>
                    <a href=member.twitter target="_blank" rel="noopener noreferrer" aria-label="Twitter">
                        <Icon icon=ic::TWITTER />
                    </a>
                    <a href=member.linkedin target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <Icon icon=ic::LINKEDIN />
                    </a>
                </div>
            </div>
        </ScrollReveal>
    }
}
