//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde_json::Value;
use webgui_northbound::ConfigRepository;
use webgui_northbound::tree::value_enabled;
use webgui_utils::{SelectOptions, ip};

use crate::debug::Debug;
use crate::interfaces::{self, InterfaceInventory};
use crate::model::{
    ApplyOutcome, CARP_VIP_NONE, FieldError, RelayCfg, RelaySubmission,
    ValidatedRelay, field, path,
};
use crate::service::RelayService;

pub const SAVE_COMMENT: &str = "DHCPv6 Relay settings saved";

#[derive(Clone, Debug)]
pub enum RelayRequest {
    Get,
    // URL-encoded form fields, in submission order.
    Post(Vec<(String, String)>),
}

#[derive(Clone, Debug)]
pub enum RelayView {
    // A DHCPv6 server is enabled; the relay can't be configured.
    Blocked,
    Form(RelayForm),
}

// Everything the relay page shows.
#[derive(Clone, Debug)]
pub struct RelayForm {
    pub config: RelayCfg,
    pub errors: Vec<FieldError>,
    pub outcome: Option<ApplyOutcome>,
    pub interfaces: SelectOptions,
    pub carp_vips: SelectOptions,
}

// ===== global functions =====

// Reads the stored relay settings.
pub fn load_defaults(store: &impl ConfigRepository) -> RelayCfg {
    let split = |path: &str| -> Vec<String> {
        store
            .get_str(path)
            .unwrap_or_default()
            .split(',')
            .filter(|item| !item.is_empty())
            .map(str::to_owned)
            .collect()
    };

    RelayCfg {
        enabled: store.enabled(path::ENABLE),
        interfaces: split(path::INTERFACE),
        agent_option: store.enabled(path::AGENT_OPTION),
        servers: split(path::SERVER),
        carp_status_vip: store
            .get_str(path::CARP_STATUS_VIP)
            .unwrap_or(CARP_VIP_NONE)
            .to_owned(),
    }
}

// Returns true if the DHCPv6 server is enabled on any enabled interface.
//
// The relay and the server can't run at the same time.
pub fn dhcpv6_server_active(store: &impl ConfigRepository) -> bool {
    let Some(Value::Object(servers)) = store.get(path::DHCPDV6) else {
        return false;
    };

    servers.iter().any(|(ifname, server)| {
        server.get("enable").is_some_and(value_enabled)
            && store.enabled(&format!("interfaces/{ifname}/enable"))
    })
}

// Checks a submission.
//
// A disabled relay isn't checked at all. Otherwise every problem is
// reported: missing fields first, then malformed servers.
pub fn validate(
    submission: &RelaySubmission,
) -> Result<ValidatedRelay, Vec<FieldError>> {
    let mut errors = vec![];

    if submission.enable {
        let servers = submission.servers.as_deref().unwrap_or_default();
        if servers.is_empty() {
            errors.push(FieldError::Required {
                field: field::SERVER,
                label: "Destination Server",
            });
        }
        if submission.interfaces.is_empty() {
            errors.push(FieldError::Required {
                field: field::INTERFACE,
                label: "Interface",
            });
        }
        errors.extend(
            submission
                .server_entries()
                .filter(|server| !ip::is_ipaddrv6(server))
                .map(|server| FieldError::InvalidServer(server.to_owned())),
        );
        if !servers.is_empty() && submission.server_entries().next().is_none() {
            errors.push(FieldError::NoServers);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ValidatedRelay::new(submission.to_config()))
}

// Saves validated settings and asks the relay service to pick them up.
//
// All settings are written as one unit. The service is only called once the
// settings are saved, and its failure doesn't undo the save.
pub fn apply(
    store: &mut impl ConfigRepository,
    service: &mut impl RelayService,
    relay: ValidatedRelay,
) -> ApplyOutcome {
    let relay = relay.into_config();

    let result = store.commit(SAVE_COMMENT, |tree| {
        tree.set_path(path::ENABLE, Value::Bool(relay.enabled))?;
        if relay.interfaces.is_empty() {
            tree.delete_path(path::INTERFACE)?;
        } else {
            tree.set_path(path::INTERFACE, relay.interface_list().into())?;
        }
        tree.set_path(path::AGENT_OPTION, Value::Bool(relay.agent_option))?;
        tree.set_path(path::SERVER, relay.server_list().into())?;
        tree.set_path(
            path::CARP_STATUS_VIP,
            relay.carp_status_vip.clone().into(),
        )?;
        Ok(())
    });
    match result {
        Ok(transaction) => Debug::ConfigPersisted(transaction).log(),
        Err(error) => {
            error.log();
            return ApplyOutcome {
                apply_error: Some(format!(
                    "Unable to save the configuration: {error}"
                )),
                ..Default::default()
            };
        }
    }

    let status = service.reconfigure(&relay);
    Debug::Reconfigured(status).log();

    ApplyOutcome {
        persisted: true,
        applied: status == 0,
        status: Some(status),
        apply_error: (status != 0).then(|| {
            format!("The relay service reported status {status}")
        }),
    }
}

// Runs one request against the relay page.
pub fn handle_request(
    store: &mut impl ConfigRepository,
    inventory: &impl InterfaceInventory,
    service: &mut impl RelayService,
    request: RelayRequest,
) -> RelayView {
    if dhcpv6_server_active(store) {
        Debug::Blocked.log();
        return RelayView::Blocked;
    }

    let mut form = RelayForm {
        config: load_defaults(store),
        errors: vec![],
        outcome: None,
        interfaces: interfaces::eligible_interfaces(inventory),
        carp_vips: interfaces::eligible_carp_vips(inventory),
    };

    if let RelayRequest::Post(fields) = request {
        let submission = RelaySubmission::from_form(&fields);
        Debug::SubmissionReceived(submission.enable).log();

        match validate(&submission) {
            Ok(relay) => {
                form.outcome = Some(apply(store, service, relay));
            }
            Err(errors) => {
                Debug::ValidationFailed(&errors).log();
                form.errors = errors;
            }
        }
        // The submitted values stay on screen, saved or not.
        form.config = submission.to_config();
    }

    RelayView::Form(form)
}
