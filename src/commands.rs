use crate::netsh::{Result, Runner};
use crate::types::DnsProfile;

fn name_arg(interface: &str) -> String {
    format!("name={interface}")
}

/// Returns the raw `show dns` output for an interface, verbatim.
///
/// A failed query (unknown interface, utility error) degrades to the error's
/// own text as the display value; read failures are never propagated.
pub async fn get_current_dns<R: Runner>(runner: &R, interface: &str) -> String {
    let name = name_arg(interface);
    match runner
        .run(&["interface", "ip", "show", "dns", &name])
        .await
    {
        Ok(output) => output,
        Err(e) => e.to_string(),
    }
}

/// Applies a profile to an interface as its static DNS configuration.
///
/// The preferred address is set first and must succeed before the alternate
/// is appended at index 2. If the alternate step fails the interface keeps
/// the preferred-only assignment; there is no rollback.
pub async fn set_dns<R: Runner>(
    runner: &R,
    profile: &DnsProfile,
    interface: &str,
) -> Result<()> {
    let name = name_arg(interface);
    runner
        .run(&["interface", "ip", "set", "dns", &name, "static", &profile.preferred])
        .await?;

    if profile.has_alternate() {
        runner
            .run(&["interface", "ip", "add", "dns", &name, &profile.alternate, "index=2"])
            .await?;
    }

    Ok(())
}

/// Reverts an interface to automatic (DHCP-supplied) DNS. Clearing an
/// interface that is already automatic is not an error.
pub async fn clear_dns<R: Runner>(runner: &R, interface: &str) -> Result<()> {
    let name = name_arg(interface);
    runner
        .run(&["interface", "ip", "set", "dns", &name, "source=dhcp"])
        .await?;
    Ok(())
}
