//! Avatar, name, bio, and motto: the targets of the entrance reveal and the
//! text the spotlight splits into units.

use leptos::prelude::*;

use crate::catalog::{AVATAR_PLACEHOLDER, Profile};

#[component]
pub fn ProfileCard(profile: Profile) -> impl IntoView {
    let avatar_src = RwSignal::new(profile.avatar_src);
    let on_avatar_error = move |_| {
        if avatar_src.get_untracked() != AVATAR_PLACEHOLDER {
            log::warn!("avatar failed to load; using placeholder");
            avatar_src.set(AVATAR_PLACEHOLDER);
        }
    };

    view! {
        <section class="profile">
            <img class="avatar" src=move || avatar_src.get() alt=profile.name on:error=on_avatar_error/>
            <h1 class="name">{profile.name}</h1>
            <p class="bio">{profile.bio}</p>
            <p class="motto">{profile.motto}</p>
        </section>
    }
}
