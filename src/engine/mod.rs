// logbridge engine: the two demo clients and the SBOM merge.
//
// Module layout:
//   sequence      : the fixed info → warn → error sequence both clients emit
//   static_client : compile-time bound calls into logbridge-core
//   dynamic_client: preflight, scoped loader, name-based resolution
//   sbom          : merge dynamically captured libraries into a CycloneDX SBOM

pub mod dynamic_client;
pub mod sbom;
pub mod sequence;
pub mod static_client;
