use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::profile::PROFILE;

use super::developer_card::DeveloperCard;

#[component]
pub fn HomePage() -> impl IntoView {
    match PROFILE.as_ref() {
        Ok(profile) => Either::Left(view! {
            <Title text=profile.name.clone() />
            <DeveloperCard profile=profile.clone() />
        }),
        Err(err) => {
            log::error!("couldn't load profile: {err}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <div class="flex min-h-screen items-center justify-center bg-black">
                    <p class="text-white/80">"This profile is unavailable right now."</p>
                </div>
            })
        }
    }
}
