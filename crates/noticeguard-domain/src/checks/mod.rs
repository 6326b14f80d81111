use crate::model::TreeModel;
use crate::policy::EffectiveConfig;
use noticeguard_types::Finding;

mod legal_digest;
mod short_notice;

pub fn run_all(model: &TreeModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    short_notice::run(model, cfg, out);
    legal_digest::run(model, cfg, out);
}
