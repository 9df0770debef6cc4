// ABOUTME: Example demonstrating manufacturing-info layout parsing
// ABOUTME: Lists the cells of an EEPROM image and the MAC address block it describes

use mfginfo_layout::{
    CellTable, DeviceTreeNode, Layout, LayoutConfig, MemoryStorage, MfgInfoError, PostProcess,
    PropertyValue,
};
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let image_path = if args.len() > 1 {
        &args[1]
    } else {
        "test-data/mfginfo.bin"
    };

    println!("Manufacturing info layout example");
    println!("=================================");
    println!("Parsing image: {}", image_path);
    println!();

    match parse_image(image_path) {
        Ok(_) => println!("Parsing completed successfully"),
        Err(e) => {
            eprintln!("Error parsing image: {}", e);
            process::exit(1);
        }
    }
}

fn parse_image(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data =
        fs::read(path).map_err(|e| format!("Failed to read image '{}': {}", path, e))?;

    println!("File size: {} bytes", data.len());

    let container = DeviceTreeNode::new(Layout::CONTAINER).with_property(
        "compatible",
        PropertyValue::String(Layout::COMPATIBLE[0].to_string()),
    );
    let layout = Layout::probe(&container, LayoutConfig::default())
        .ok_or("layout container is not compatible")?;

    let storage = MemoryStorage::new(&data);
    let mut cells = CellTable::new();
    let count = layout.add_cells(&storage, &mut cells)?;

    println!();
    println!("Cells ({})", count);
    println!("─────────");
    for cell in &cells {
        let value = cells.read_cell(&storage, &cell.name, 0)?;
        println!(
            "{:<20} @{:>4} +{:<3} {}",
            cell.name,
            cell.offset,
            cell.bytes,
            String::from_utf8_lossy(&value)
        );
    }

    if cells
        .get(LayoutConfig::MAC_KEY)
        .is_some_and(|c| c.post_process == PostProcess::MacDerive)
    {
        print_mac_block(&cells, &storage)?;
    }

    Ok(())
}

fn print_mac_block(cells: &CellTable, storage: &MemoryStorage) -> Result<(), MfgInfoError> {
    println!();
    println!("MAC address block");
    println!("─────────────────");

    for index in 0.. {
        match cells.mac_address(storage, index) {
            Ok(octets) => {
                let text: Vec<String> = octets.iter().map(|o| format!("{:02x}", o)).collect();
                println!("port {:>2}: {}", index, text.join(":"));
            }
            Err(MfgInfoError::Range { .. }) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
