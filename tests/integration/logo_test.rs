use omnifetch::core::logo::{find_by_name, logos, select_logo};
use omnifetch::platform::OsFamily;

#[test]
fn test_ubuntu_detected_from_os_string() {
    let selection = select_logo(None, "Ubuntu 22.04.3 LTS", OsFamily::Linux);
    assert_eq!(selection.entry.key, "Ubuntu");
    assert!(selection.warning.is_none());
}

#[test]
fn test_override_wins_over_os_string() {
    let selection = select_logo(Some("arch"), "Ubuntu 22.04.3 LTS", OsFamily::Linux);
    assert_eq!(selection.entry.key, "Arch");
    assert!(selection.warning.is_none());

    let selection = select_logo(Some("ARCH"), "macOS 14.2", OsFamily::MacOs);
    assert_eq!(selection.entry.key, "Arch");
}

#[test]
fn test_unknown_override_warns_and_detects() {
    let selection = select_logo(Some("templeos"), "Fedora Linux 39 (Workstation Edition)", OsFamily::Linux);
    assert_eq!(selection.entry.key, "Fedora");
    assert_eq!(
        selection.warning.as_deref(),
        Some("ASCII logo for 'templeos' not found. Falling back to default.")
    );
}

#[test]
fn test_override_is_exact_not_substring() {
    // "Ubu" is contained in "Ubuntu" but is not a key
    let selection = select_logo(Some("Ubu"), "Debian GNU/Linux 12", OsFamily::Linux);
    assert_eq!(selection.entry.key, "Debian");
    assert!(selection.warning.is_some());
}

#[test]
fn test_family_default_when_nothing_matches() {
    assert_eq!(select_logo(None, "", OsFamily::Linux).entry.key, "Linux");
    assert_eq!(select_logo(None, "Darwin", OsFamily::MacOs).entry.key, "macOS");
    assert_eq!(select_logo(None, "", OsFamily::Windows).entry.key, "Windows");
    assert_eq!(select_logo(None, "", OsFamily::Android).entry.key, "Android");
}

#[test]
fn test_other_family_gets_placeholder() {
    let selection = select_logo(None, "FreeBSD 14.0-RELEASE", OsFamily::Other);
    assert!(!selection.art().is_empty());
    assert_ne!(selection.entry.key, "Linux");
}

#[test]
fn test_os_strings_from_each_platform() {
    let cases = [
        ("Linux Mint 21.2", "Mint"),
        ("Manjaro Linux", "Manjaro"),
        ("EndeavourOS Linux", "EndeavourOS"),
        ("Pop!_OS 22.04 LTS", "Pop!_OS"),
        ("openSUSE Tumbleweed", "OpenSUSE"),
        ("Android 14", "Android"),
        ("Windows 11 Pro", "Windows"),
        ("macOS 14.2", "macOS"),
        ("NixOS 23.11 (Tapir)", "NixOS"),
    ];
    for (os, key) in cases {
        assert_eq!(select_logo(None, os, OsFamily::Linux).entry.key, key, "{}", os);
    }
}

#[test]
fn test_table_lookup() {
    assert!(logos().len() >= 20);
    assert_eq!(find_by_name("pop!_os").map(|e| e.key), Some("Pop!_OS"));
    assert!(find_by_name("nonexistent").is_none());
}
