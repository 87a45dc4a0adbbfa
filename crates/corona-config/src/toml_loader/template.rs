//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> String {
    r##"# Corona Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[rings]
# count = 1000           # 1-5000
# segments = 128         # 3-4096, vertices per loop
# seed = 42              # omit for a fresh random scene each run
# radius = { min = 1.5, max = 4.5 }
# amplitude = { min = 0.02, max = 0.10 }
# frequency = { min = 2.0, max = 6.0 }
# opacity = { min = 0.05, max = 0.25 }
# seed_range = 100.0     # modulation seeds drawn from [0, seed_range)

[modulation]
# enabled = true
# floor = 0.0            # effective amplitude = amplitude * (floor + span * level)
# span = 1.0
#
# [[modulation.terms]]
# weight = 0.4
# rate = 0.07
# seed = 0               # which ring seed offsets this wave (0 or 1)
# seed_scale = 1.0

[palette]
# enabled = true         # recompute vertex colors every tick
# base_hue = 40.0        # degrees
# hue_spread = 20.0      # degrees
# hue_rate = 8.0
# saturation = 1.0       # 0.0-1.0
# lightness = 0.6        # 0.0-1.0
# initial_jitter = 30.0  # degrees

[sun]
# enabled = true
# wave = "sine"          # sine | cosine
# speed = 0.05
# exponent = 0.8
# sweep = 0.4            # 0.0-0.5
# edge_softness = 0.12   # 0.0-0.5
# color = "#ffcc00"
# emissive_color = "#ffaa00"
# pulse_amount = 0.2
# pulse_rate = 1.5

[clock]
# step = 0.01            # time advanced per tick
# time_scale = 1.0

[performance]
# frame_rate = 60        # 1-240
# warn_on_overrun = true

[logging]
# level = "INFO"         # TRACE | DEBUG | INFO | WARNING | ERROR
"##
    .to_string()
}
