#![no_main]
#![no_std]

use cortex_m_rt::entry;
use log::{info, LevelFilter};
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use screwdrive::{
    config, console_println,
    control::{DriveCommander, StepCounter, Telemetry},
    drivers::A4988,
    hw::{console, BoardPins, MicrosTimer, Usart},
    motors::{Drivetrain, MotorUnit},
    protocol::Parser,
    time::Clock,
};

/// STEP edges from both motors since the last telemetry period.
static STEPS: StepCounter = StepCounter::new();

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.sysclk(216.MHz()).freeze();

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOB, dp.GPIOC, dp.GPIOD, dp.GPIOE, dp.GPIOF);

    // USART3 (ST-LINK VCP)
    let usart_cfg = Config {
        baud_rate: config::SERIAL_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART3,
        (pins.usart3.tx, pins.usart3.rx),
        &clocks,
        usart_cfg,
    );
    let (usart, mut rx) = Usart::split(serial);
    console::init(usart, LevelFilter::Info);

    // TIM2 (time base)
    let timer = MicrosTimer::tim2(dp.TIM2, &clocks);

    // Motors
    let mut drive = Drivetrain::new(
        MotorUnit::new(A4988::new(pins.left), config::LEFT_INVERT),
        MotorUnit::new(A4988::new(pins.right), config::RIGHT_INVERT),
    );
    drive.init(config::DEFAULT_MICROSTEP);

    let mut power_sense = pins.power_sense;
    let mut parser = Parser::new();
    let mut commander = DriveCommander::new();
    let mut telemetry = Telemetry::new(config::TELEMETRY_PERIOD_MS);

    info!("screwdrive ready");

    loop {
        if !power_sense.is_present() {
            commander.power_lost(&mut drive);
        }

        while let Some(byte) = rx.read_byte() {
            if let Some(cmd) = parser.push(byte) {
                let result = commander.apply(cmd, &mut drive);
                console_println!("{}", cmd);
                if let Err(e) = result {
                    console_println!("ERR {}", e);
                }
            }
        }

        let now = timer.now();
        drive.tick(now, &STEPS);

        if let Some(report) = telemetry.poll(now, &drive, &STEPS) {
            if config::TELEMETRY_ENABLED {
                console::write_fmt(format_args!("{}", report));
            }
        }
    }
}
