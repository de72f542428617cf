//! Contact book handlers.
//!
//! Every handler that changes the book saves it before replying.

use tracing::info;

use super::Params;
use crate::commands::output::CommandOutput;
use crate::contacts::{Address, Birthday, ContactField, Email, Phone, Record};
use crate::error::{HandlerError, HandlerResult};
use crate::session::Session;

pub const CONTACT_HEADERS: [&str; 5] = ["Name", "Phones", "Birthday", "E-mail", "Address"];

fn no_contact(name: &str) -> CommandOutput {
    CommandOutput::info(format!("No contact \"{name}\""))
}

/// Handle add_contact: name, phone, birthday, email, address.
///
/// For a name already in the book only the phone is used, and the reply says
/// so when other fields were given.
pub fn add_contact(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let name = params.required(0, "name")?.trim().to_string();
    let phone = params.optional(1);

    if session.contacts.contains(&name) {
        let phone = phone.ok_or_else(|| {
            HandlerError::invalid_value(format!("contact {name} already exists, give a new phone"))
        })?;
        let phone = Phone::parse(phone)?;
        session.contacts.get_mut(&name)?.add_phone(phone)?;
        session.save_contacts()?;
        let mut reply = format!("New number added to {name}");
        if (2..=4).any(|index| params.optional(index).is_some()) {
            reply.push_str(". Birthday, email and address were not changed, use change_* for them");
        }
        return Ok(CommandOutput::info(reply));
    }

    let today = session.today();
    let mut record = Record::new(name)?;
    if let Some(raw) = phone {
        record = record.with_phone(Phone::parse(raw)?);
    }
    if let Some(raw) = params.optional(2) {
        record = record.with_birthday(Birthday::parse(raw, today)?);
    }
    if let Some(raw) = params.optional(3) {
        record = record.with_email(Email::parse(raw)?);
    }
    if let Some(raw) = params.optional(4) {
        record = record.with_address(Address::parse(raw)?);
    }

    info!("Adding contact {}", record.name);
    session.contacts.add_record(record)?;
    session.save_contacts()?;
    Ok(CommandOutput::info("Contact add successfully"))
}

/// Handle change_phone: name, old, new.
pub fn change_phone(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let name = params.required(0, "name")?;
    let old = params.required(1, "old")?;
    let new = params.required(2, "new")?;

    if !session.contacts.contains(name) {
        return Ok(no_contact(name));
    }
    let new = Phone::parse(new)?;
    session.contacts.get_mut(name)?.change_phone(old, new)?;
    session.save_contacts()?;
    Ok(CommandOutput::info("Contact change successfully"))
}

/// Shared body of the change_address / change_birthday / change_email
/// handlers. Everything after the old value is the new value.
fn change_field(
    session: &mut Session,
    params: &Params,
    field: ContactField,
) -> HandlerResult<CommandOutput> {
    let name = params.required(0, "name")?;
    params.required(1, "old")?;
    params.required(2, "new")?;

    if !session.contacts.contains(name) {
        return Ok(no_contact(name));
    }
    let today = session.today();
    let record = session.contacts.get_mut(name)?;
    let (old, new) = split_old_new(record.field_value(field), params)?;
    record.change_field(field, &old, &new, today)?;
    session.save_contacts()?;
    Ok(CommandOutput::info(format!(
        "Contact {} change successfully",
        field.as_str()
    )))
}

/// Splits `params[1..]` into the old and the new value. A multi-word
/// current value is matched as a prefix; otherwise the old value is the
/// single token after the name.
fn split_old_new(current: Option<String>, params: &Params) -> HandlerResult<(String, String)> {
    let rest = params.as_slice()[1..].join(" ");
    if let Some(current) = current {
        let current = current.split_whitespace().collect::<Vec<_>>().join(" ");
        if let Some(new) = rest.strip_prefix(&format!("{current} ")) {
            if !new.trim().is_empty() {
                return Ok((current, new.trim().to_string()));
            }
        }
    }
    let old = params.required(1, "old")?.to_string();
    let new = params.joined_from(2, "new")?;
    Ok((old, new))
}

/// Handle change_address: name, old, new.
pub fn change_address(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    change_field(session, params, ContactField::Address)
}

/// Handle change_birthday: name, old, new.
pub fn change_birthday(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    change_field(session, params, ContactField::Birthday)
}

/// Handle change_email: name, old, new.
pub fn change_email(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    change_field(session, params, ContactField::Email)
}

/// Handle phone: show a contact's numbers.
pub fn phone(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let name = params.joined_from(0, "name")?;
    match session.contacts.get(&name) {
        Some(record) => Ok(CommandOutput::table_with(
            &["Name", "Phones"],
            vec![vec![record.name.clone(), record.phones_joined()]],
        )),
        None => Ok(CommandOutput::info(format!("No contact {name}"))),
    }
}

/// Handle show_all.
pub fn show_all(session: &mut Session, _params: &Params) -> HandlerResult<CommandOutput> {
    if session.contacts.is_empty() {
        return Ok(CommandOutput::info("Contact list is empty"));
    }
    let rows = session.contacts.iter().map(Record::table_row).collect();
    Ok(CommandOutput::table_with(&CONTACT_HEADERS, rows))
}

/// Handle delete_phone: name, phone.
pub fn delete_phone(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let name = params.required(0, "name")?;
    let phone = params.required(1, "phone")?;

    if !session.contacts.contains(name) {
        return Ok(no_contact(name));
    }
    session.contacts.get_mut(name)?.delete_phone(phone)?;
    session.save_contacts()?;
    Ok(CommandOutput::info("Phone number deleted successfully"))
}

/// Handle contact_delete: name.
pub fn contact_delete(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let name = params.required(0, "name")?;
    session.contacts.remove_record(name)?;
    session.save_contacts()?;
    info!("Deleted contact {name}");
    Ok(CommandOutput::info(format!("User with name {name} was deleted")))
}

/// Handle search: text in names or phones.
pub fn search(session: &mut Session, params: &Params) -> HandlerResult<CommandOutput> {
    let text = params.joined_from(0, "text")?;
    let found = session.contacts.search(&text);
    if found.is_empty() {
        return Ok(CommandOutput::info("No results"));
    }
    let rows = found.into_iter().map(Record::table_row).collect();
    Ok(CommandOutput::table_with(&CONTACT_HEADERS, rows))
}
