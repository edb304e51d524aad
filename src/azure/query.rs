//! Azure CLI query kinds.

use std::fmt;

/// One read-only Azure CLI query run against a resource group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// ARM template export of the whole group.
    Template,
    Resources,
    Aks,
    Nsgs,
    Vnets,
    LoadBalancers,
    PublicIps,
    Disks,
    StorageAccounts,
}

impl QueryKind {
    /// `az` sub-command words, without the resource group selector.
    fn subcommand(&self) -> &'static str {
        match self {
            QueryKind::Template => "group export",
            QueryKind::Resources => "resource list",
            QueryKind::Aks => "aks list",
            QueryKind::Nsgs => "network nsg list",
            QueryKind::Vnets => "network vnet list",
            QueryKind::LoadBalancers => "network lb list",
            QueryKind::PublicIps => "network public-ip list",
            QueryKind::Disks => "disk list",
            QueryKind::StorageAccounts => "storage account list",
        }
    }

    /// `az group export` names the group with `--name`, the list commands use `--resource-group`.
    fn group_flag(&self) -> &'static str {
        match self {
            QueryKind::Template => "--name",
            _ => "--resource-group",
        }
    }

    /// Full command line for this query, program and group quoted.
    pub fn command_line(&self, az_bin: &str, resource_group: &str) -> String {
        format!(
            "'{az_bin}' {sub} {flag} '{resource_group}' --output json",
            sub = self.subcommand(),
            flag = self.group_flag(),
        )
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.subcommand())
    }
}
