use anyhow::Result;
use encodecraft_codec::{CodecInfo, CodecKind};

use crate::args::OutputFormat;
use crate::printing::print_codec_info;

pub fn list_codecs(format: OutputFormat) -> Result<()> {
    let infos: Vec<CodecInfo> = CodecKind::ALL.iter().map(|kind| kind.info()).collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&infos)?);
        }
        OutputFormat::Pretty => {
            println!("\n🔧 Available codecs");
            println!("{}", "=".repeat(50));
            for info in &infos {
                print_codec_info(info);
            }
            println!("\n💡 Use 'encodecraft encode <codec> <text>' to convert");
        }
    }

    Ok(())
}
