fn main() {
    multiversx_sc_meta_lib::cli_main::<ternary_rewards::AbiProvider>();
}
