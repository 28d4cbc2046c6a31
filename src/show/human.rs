use super::types::StreamInfo;
use prettytable::{Table, format, row};

pub fn build_table(info: &StreamInfo) -> Table {
	let mut table = Table::new();
	table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
	table.set_titles(row!["#", "offset", "tag", "size", "kind", "details"]);

	for chunk in &info.chunks {
		table.add_row(row![
			chunk.index,
			chunk.offset,
			chunk.tag,
			chunk.size,
			chunk.kind,
			chunk.summary
		]);
	}

	table
}

pub fn render(info: &StreamInfo) {
	println!("{}", info.path);
	build_table(info).printstd();

	match &info.truncation {
		Some(reason) => println!("stopped at offset {}: {}", info.end_offset, reason),
		None => println!("{} chunks, {} bytes", info.chunks.len(), info.end_offset),
	}
}
