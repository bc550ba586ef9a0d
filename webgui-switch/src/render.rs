//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::fmt::Write;

use itertools::Itertools;
use webgui_utils::html::{self, BoxClass};

use crate::page::{DEVICE_FIELD, PortRow, SwitchPage};

pub const PAGE: &str = "/switch_ports.php";

const TITLE: &[&str] = &["Interfaces", "Switch", "Ports"];
const SAVED_NOTICE: &str = "Port VIDs updated.";
const DOT1Q_NOTICE: &str = "VLAN IDs are displayed only if 802.1q VLAN mode \
    is enabled on the \"VLANs\" tab. The Port VIDs may be edited by clicking \
    on the cell in the table above, then clicking \"Save\"";

// Collects the edited PVIDs into a JSON document and posts it back. Nothing
// is posted while no ports are listed, as an empty document clears every
// stored PVID.
const SUBMIT_SCRIPT: &str = r#"<script type="text/javascript">
document.getElementById('submit').addEventListener('click', function () {
	var rows = document.querySelectorAll('#vlanporttablebody tr');
	if (rows.length === 0) {
		return;
	}
	var vids = [];
	rows.forEach(function (row) {
		vids.push({
			port: row.cells[0].textContent.trim(),
			vid: row.cells[2].textContent.trim()
		});
	});
	var form = document.getElementById('vidform');
	form.elements['vids'].value = JSON.stringify({vids: vids});
	form.submit();
});
</script>
"#;

// ===== global functions =====

pub fn render(page: &SwitchPage, csrf_token: &str) -> String {
    let dot1q = page.info.as_ref().is_some_and(|info| info.dot1q());

    let mut out = html::head(TITLE);
    out.push_str(&html::top_tabs(&[
        ("System", false, "/switch_system.php"),
        ("Ports", true, PAGE),
        ("VLANs", false, "/switch_vlans.php"),
    ]));

    if !page.devices.is_empty() {
        out.push_str(&device_selector(page, csrf_token));
    }
    if !page.errors.is_empty() {
        out.push_str(&html::input_errors(&page.errors));
    }
    if page.saved {
        out.push_str(&html::info_box(SAVED_NOTICE, BoxClass::Success, true));
    }

    let _ = write!(
        out,
        "<div class=\"panel panel-default\">\n\
         <div class=\"panel-heading\"><h2 class=\"panel-title\">{} Switch Ports\
         </h2></div>\n<div class=\"panel-body\">\n\
         <table id=\"vlanporttable\" class=\"table table-striped table-hover\">\n\
         <thead>\n<tr>\n<th>Port #</th>\n<th>Port name</th>\n",
        html::escape(&page.title)
    );
    if dot1q {
        out.push_str("<th>Port VID</th>\n");
    }
    out.push_str(
        "<th>Flags</th>\n<th>Media</th>\n<th>Status</th>\n</tr>\n</thead>\n\
         <tbody id=\"vlanporttablebody\">\n",
    );
    for row in &page.ports {
        port_row(&mut out, row, dot1q);
    }
    out.push_str("</tbody>\n</table>\n</div>\n</div>\n");

    // PVIDs can only be edited in 802.1Q mode.
    if dot1q {
        let _ = write!(
            out,
            "<form id=\"vidform\" method=\"post\" action=\"{PAGE}\">\n{}{}{}</form>\n",
            html::hidden(html::CSRF_FIELD, csrf_token),
            html::hidden("ajax", "ajax"),
            html::hidden("vids", ""),
        );
        out.push_str(
            "<nav class=\"action-buttons\">\n\
             <span class=\"pull-left text-info\">Click a Port VID to edit</span>\n\
             <button name=\"submit\" id=\"submit\" type=\"button\" \
             class=\"btn btn-primary btn-sm\" value=\"Save\">Save</button>\n</nav>\n",
        );
    }
    out.push_str(&html::info_box(DOT1Q_NOTICE, BoxClass::Info, false));
    if dot1q {
        out.push_str(SUBMIT_SCRIPT);
    }
    out.push_str(&html::foot());
    out
}

// ===== helper functions =====

fn device_selector(page: &SwitchPage, csrf_token: &str) -> String {
    let selected = page.device.iter().cloned().collect::<Vec<_>>();
    format!(
        "{}{}<button type=\"submit\" class=\"btn btn-default\">Select</button>\n</form>\n",
        html::form_open(PAGE, csrf_token),
        html::select(DEVICE_FIELD, "Switch", &selected, &page.devices, false, None),
    )
}

fn port_row(out: &mut String, row: &PortRow, dot1q: bool) {
    let port = &row.port;
    let _ = write!(
        out,
        "<tr>\n<td>{}</td>\n<td>{}</td>\n",
        port.port,
        html::escape(&row.name)
    );
    if dot1q {
        let _ = writeln!(
            out,
            "<td title=\"Click to edit\" class=\"editable icon-pointer\">{}</td>",
            html::escape(&row.pvid)
        );
    }
    let media = port
        .media
        .as_ref()
        .map(|media| html::escape(&media.to_string()))
        .unwrap_or_default();
    let class = port
        .status
        .class()
        .map(|class| format!(" class=\"{class}\""))
        .unwrap_or_default();
    let _ = write!(
        out,
        "<td>{}</td>\n<td>{media}</td>\n<td{class}>{}</td>\n</tr>\n",
        html::escape(&port.flags.iter().join(",")),
        html::ucwords(&html::escape(&port.status.to_string())),
    );
}
