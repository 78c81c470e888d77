//! CSV output formatter

use super::RankSection;
use anyhow::Result;
use linkrank_core::LinkGraph;

pub fn format_sections(sections: &[RankSection]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["method", "page", "rank"])?;

    for section in sections {
        for (page, rank) in section.ranks.iter() {
            let rank = rank.to_string();
            writer.write_record([section.method, page, rank.as_str()])?;
        }
    }

    finish(writer)
}

pub fn format_graph(graph: &LinkGraph) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["source", "target"])?;

    for page in graph.pages() {
        for target in graph.links(page).into_iter().flatten() {
            writer.write_record([page, target])?;
        }
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
