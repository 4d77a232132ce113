use crate::ctx::{RequestCtx, split_host_port};
use crate::locale::{Locale, LocaleCatalog, LocaleToken};

/// Matches the first host label (before the first `.`) against the locale pattern.
///
/// A missing Host header is synthesized from server-name and server-port first.
/// When `rewrite` is set the label and its dot are removed from both the Host
/// header and the server-name.
pub(crate) fn extract(
    ctx: &mut RequestCtx,
    catalog: &LocaleCatalog,
    rewrite: bool,
) -> Option<Locale> {
    ctx.ensure_host();

    let (label, rest) = ctx.host()?.split_once('.')?;
    let locale = LocaleToken::parse(label).and_then(|token| catalog.normalize_token(token))?;

    if rewrite {
        let rest = rest.to_string();
        match ctx.set_host(&rest) {
            Ok(()) => {
                let (server_name, _) = split_host_port(&rest);
                let server_name = server_name.to_string();
                ctx.set_server_name(server_name);
            }
            Err(err) => tracing::debug!(host = %rest, error = %err, "cannot strip host label"),
        }
    }

    Some(locale)
}
