use actix_multipart::form::tempfile::TempFile;
use infer::Infer;

use crate::entities::commission::ReferenceUpload;

const GENERIC_BINARY: &str = "application/octet-stream";

/// Describes an uploaded part without keeping its bytes. The declared
/// content type wins; when the client sent none (or a generic binary type)
/// the type is sniffed from the file's magic bytes.
pub fn describe_upload(file: &TempFile) -> ReferenceUpload {
    let declared = file
        .content_type
        .as_ref()
        .map(|mime| mime.essence_str().to_string())
        .filter(|mime| mime != GENERIC_BINARY);

    let mime_type = declared.or_else(|| sniff_mime(file));

    ReferenceUpload {
        file_name: file
            .file_name
            .clone()
            .unwrap_or_else(|| "unnamed file".to_string()),
        mime_type,
        size: file.size,
    }
}

fn sniff_mime(file: &TempFile) -> Option<String> {
    Infer::new()
        .get_from_path(file.file.path())
        .ok()
        .flatten()
        .map(|kind| kind.mime_type().to_string())
}
