//! Terminal output utilities.
//!
//! Renders a [`SubnetInfo`] as aligned label/value lines.

use colored::Colorize;

use crate::models::SubnetInfo;

/// Format a label as a left-aligned field of at least `width` characters.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();

    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}

const LABEL_WIDTH: usize = 19;

/// Print a subnet computation result to stdout, one field per line.
pub fn print_subnet_info(info: &SubnetInfo) {
    print_line("Network address:", info.network_address.to_string());
    print_line("Broadcast address:", info.broadcast_address.to_string());
    print_line("Subnet mask:", info.subnet_mask.to_string());
    print_line("CIDR notation:", format!("/{}", info.cidr_notation));
    if let Some(class) = info.network_class {
        print_line("Network class:", class.to_string());
    }
    print_line("Host range:", info.host_range.to_string());
    print_line("Total hosts:", info.total_hosts.to_string());
    print_line("Total addresses:", info.total_addresses.to_string());
}

fn print_line(label: &str, value: String) {
    println!("{} {}", format_field(label, LABEL_WIDTH), value.cyan());
}
