//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use webgui_northbound::path::PathSegment;
use webgui_northbound::{ConfigPath, Error};

fn key(key: &str) -> PathSegment {
    PathSegment::Key(key.to_owned())
}

#[test]
fn test_parse_plain_path() {
    let path = "dhcrelay6/enable".parse::<ConfigPath>().unwrap();
    assert_eq!(path.segments(), &[key("dhcrelay6"), key("enable")]);
}

#[test]
fn test_parse_attached_index() {
    let path = "switches/switch[0]/swports/swport"
        .parse::<ConfigPath>()
        .unwrap();
    assert_eq!(
        path.segments(),
        &[
            key("switches"),
            key("switch"),
            PathSegment::Index(0),
            key("swports"),
            key("swport"),
        ]
    );
    assert_eq!(path.to_string(), "switches/switch[0]/swports/swport");
}

#[test]
fn test_parse_numeric_segment() {
    let attached = "switches/switch[1]".parse::<ConfigPath>().unwrap();
    let separate = "/switches/switch/1/".parse::<ConfigPath>().unwrap();
    assert_eq!(attached, separate);
}

#[test]
fn test_parse_invalid_paths() {
    for path in ["", "/", "[0]/foo", "switch[", "switch[a]", "switch[0]x", "a]b"]
    {
        let result = path.parse::<ConfigPath>();
        assert!(
            matches!(result, Err(Error::InvalidPath(..))),
            "{path:?} should be rejected"
        );
    }
}
