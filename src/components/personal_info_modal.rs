//! Modal for editing personal information.
//!
//! The form starts from the current profile. Saving hands a
//! [`PersonalInfoUpdate`] to the page, which merges it and persists the
//! result; cancel, Escape, or a backdrop click discards the edit.

#[cfg(test)]
#[path = "personal_info_modal_test.rs"]
mod personal_info_modal_test;

use leptos::prelude::*;
use time::Date;

use crate::state::profile::{BLOOD_GROUPS, EmergencyContactUpdate, PersonalInfoUpdate, ProfileRecord};
use crate::util::validate;

/// Raw modal inputs. Lists are comma separated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PersonalInfoForm {
    pub date_of_birth: String,
    pub blood_group: String,
    pub address: String,
    pub languages: String,
    pub certifications: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_relation: String,
}

impl PersonalInfoForm {
    #[must_use]
    pub fn from_profile(profile: &ProfileRecord) -> Self {
        let seed = PersonalInfoUpdate::from_profile(profile);
        let contact = seed.emergency_contact.unwrap_or_default();
        Self {
            date_of_birth: seed.date_of_birth,
            blood_group: seed.blood_group,
            address: seed.address,
            languages: seed.languages.join(", "),
            certifications: seed.certifications.join(", "),
            contact_name: contact.name,
            contact_phone: contact.phone,
            contact_relation: contact.relation,
        }
    }

    /// Build the update. Blank inputs keep the current value.
    ///
    /// # Errors
    ///
    /// Returns a message when a supplied date of birth or contact phone is
    /// malformed.
    pub fn to_update(&self, today: Date) -> Result<PersonalInfoUpdate, &'static str> {
        let date_of_birth = self.date_of_birth.trim();
        if !date_of_birth.is_empty() {
            validate::date_of_birth(date_of_birth, today)?;
        }
        let contact_phone = self.contact_phone.trim();
        if !contact_phone.is_empty() && !validate::is_ten_digit_phone(contact_phone) {
            return Err("Please enter a valid 10-digit phone number");
        }

        let contact = EmergencyContactUpdate {
            name: self.contact_name.trim().to_owned(),
            phone: contact_phone.to_owned(),
            relation: self.contact_relation.trim().to_owned(),
        };
        let has_contact = !(contact.name.is_empty() && contact.phone.is_empty() && contact.relation.is_empty());

        Ok(PersonalInfoUpdate {
            date_of_birth: date_of_birth.to_owned(),
            blood_group: self.blood_group.trim().to_owned(),
            address: self.address.trim().to_owned(),
            languages: validate::split_list(&self.languages),
            certifications: validate::split_list(&self.certifications),
            emergency_contact: has_contact.then_some(contact),
        })
    }
}

#[component]
pub fn PersonalInfoModal(
    profile: RwSignal<ProfileRecord>,
    on_save: Callback<PersonalInfoUpdate>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(profile.with_untracked(PersonalInfoForm::from_profile));
    let error = RwSignal::new(None::<&'static str>);

    let on_backdrop = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|f| f.to_update(crate::util::dates::today())) {
            Ok(update) => on_save.run(update),
            Err(message) => error.set(Some(message)),
        }
    };

    let input = move |label: &'static str,
                      input_type: &'static str,
                      get: fn(&PersonalInfoForm) -> &String,
                      set: fn(&mut PersonalInfoForm, String)| {
        view! {
            <label class="form-field">
                <span class="form-label">{label}</span>
                <input
                    class="form-input"
                    type=input_type
                    prop:value=move || form.with(|f| get(f).clone())
                    on:input=move |ev| {
                        error.set(None);
                        form.update(|f| set(f, event_target_value(&ev)));
                    }
                />
            </label>
        }
    };

    let blood_options = BLOOD_GROUPS
        .into_iter()
        .map(|group| view! { <option value=group>{group}</option> })
        .collect_view();

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--personal-info"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"Edit Personal Information"</h2>
                <form on:submit=on_submit>
                    {input("Date of Birth", "date", |f| &f.date_of_birth, |f, v| f.date_of_birth = v)}
                    <label class="form-field">
                        <span class="form-label">"Blood Group"</span>
                        <select
                            class="form-input"
                            prop:value=move || form.with(|f| f.blood_group.clone())
                            on:change=move |ev| form.update(|f| f.blood_group = event_target_value(&ev))
                        >
                            <option value="">"Select blood group"</option>
                            {blood_options}
                        </select>
                    </label>
                    {input("Address", "text", |f| &f.address, |f, v| f.address = v)}
                    {input("Languages (comma separated)", "text", |f| &f.languages, |f, v| f.languages = v)}
                    {input("Certifications (comma separated)", "text", |f| &f.certifications, |f, v| f.certifications = v)}
                    <h3>"Emergency Contact"</h3>
                    {input("Name", "text", |f| &f.contact_name, |f, v| f.contact_name = v)}
                    {input("Phone", "tel", |f| &f.contact_phone, |f, v| f.contact_phone = v)}
                    {input("Relationship", "text", |f| &f.contact_relation, |f, v| f.contact_relation = v)}

                    {move || error.get().map(|m| view! { <p class="form-error">{m}</p> })}

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">"Save"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
