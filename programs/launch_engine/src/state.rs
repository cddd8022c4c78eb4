use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{self, spl_token::instruction::AuthorityType, Mint, Token, TokenAccount};

use crate::errors::LaunchError;
use crate::utils::curve::{buy_cost, sell_proceeds, spot_price};
use crate::utils::limits::{check_day_sell, check_user_sell, DAY_SELL_CAP, PER_USER_SELL_CAP};
use crate::utils::window::{self, Window, WindowPhase};

#[account]
pub struct GlobalState {
    pub admin: Pubkey,       // sole signer for admin-gated instructions
    pub launch_count: u64,   // next launch id; also the launch PDA seed
    pub bump: u8,
}

impl GlobalState {
    pub const SEED: &'static str = "global";

    // Discriminator (8) + admin (32) + launch_count (8) + bump (1)
    pub const ACCOUNT_SIZE: usize = 8 + 32 + 8 + 1;
}

#[account]
pub struct BondingCurveState {
    pub launch_metadata: Pubkey,
    pub base_price: u64,      // lamports per base unit at zero supply
    pub slope: u64,           // lamports added per base unit sold
    pub current_supply: u64,  // base units currently sold into the market
    pub decimals: u8,
}

impl BondingCurveState {
    pub const SEED_PREFIX: &'static str = "bonding";

    // Discriminator (8) + launch_metadata (32) + 3 * u64 (24) + decimals (1)
    pub const ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8 + 8 + 1;

    /// Price of the next unit at the current supply.
    pub fn spot_price(&self) -> Result<u64> {
        spot_price(self.base_price, self.slope, self.current_supply)
    }

    pub fn quote_buy(&self, amount: u64) -> Result<u64> {
        buy_cost(self.base_price, self.slope, self.current_supply, amount)
    }

    pub fn quote_sell(&self, amount: u64) -> Result<u64> {
        sell_proceeds(self.base_price, self.slope, self.current_supply, amount)
    }

    pub fn record_buy(&mut self, amount: u64) -> Result<()> {
        self.current_supply = self
            .current_supply
            .checked_add(amount)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn record_sell(&mut self, amount: u64) -> Result<()> {
        self.current_supply = self
            .current_supply
            .checked_sub(amount)
            .ok_or(LaunchError::InsufficientSupply)?;
        Ok(())
    }
}

#[account]
pub struct LaunchMetadata {
    pub token_mint: Pubkey,
    pub vault: Pubkey,         // launch-owned ATA holding unsold supply
    pub launch_id: u64,
    pub current_day: u64,      // rollovers since creation
    pub window1_start: i64,    // first sell window, [start, end)
    pub window1_end: i64,
    pub window2_start: i64,    // second sell window, same day
    pub window2_end: i64,
    pub day_sold_total: u64,   // all wallets, current day
    pub bump: u8,
}

/// Running totals a sell will commit once its transfers succeed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SellQuota {
    pub user_total: u64,
    pub day_total: u64,
}

impl LaunchMetadata {
    pub const SEED_PREFIX: &'static str = "launch";
    pub const MINT_SEED_PREFIX: &'static str = "mint";

    // Discriminator (8) + token_mint (32) + vault (32) + launch_id (8) + current_day (8)
    // + window1 (16) + window2 (16) + day_sold_total (8) + bump (1)
    pub const ACCOUNT_SIZE: usize = 8 + 32 + 32 + 8 + 8 + 16 + 16 + 8 + 1;

    pub fn windows(&self) -> [Window; 2] {
        [
            (self.window1_start, self.window1_end),
            (self.window2_start, self.window2_end),
        ]
    }

    pub fn window_phase(&self, now: i64) -> WindowPhase {
        window::phase_of(now, &self.windows())
    }

    /// Points both sell windows at the scheduled slots for the day containing `now`.
    pub fn schedule_window(&mut self, now: i64) {
        let [first, second] = window::scheduled_windows(now);
        self.set_bounds(first, second);
    }

    /// Windows must be non-empty and the second may not open before the first closes.
    pub fn set_window(&mut self, first: Window, second: Window) -> Result<()> {
        require!(first.1 > first.0, LaunchError::InvalidWindowTimes);
        require!(second.1 > second.0, LaunchError::InvalidWindowTimes);
        require!(second.0 >= first.1, LaunchError::InvalidWindowTimes);
        self.set_bounds(first, second);
        Ok(())
    }

    fn set_bounds(&mut self, first: Window, second: Window) {
        (self.window1_start, self.window1_end) = first;
        (self.window2_start, self.window2_end) = second;
    }

    /// Starts the next launch day if `now` has moved past the current window's day.
    /// Returns whether a rollover happened.
    pub fn roll_day(&mut self, now: i64) -> Result<bool> {
        if !window::crossed_day_boundary(self.window1_start, now) {
            return Ok(false);
        }
        self.current_day = self
            .current_day
            .checked_add(1)
            .ok_or(LaunchError::ArithmeticOverflow)?;
        self.schedule_window(now);
        self.day_sold_total = 0;
        Ok(true)
    }

    /// Runs every sell precondition in order: window, wallet cap, day cap, balance.
    pub fn authorize_sell(
        &self,
        record: &UserRecord,
        now: i64,
        amount: u64,
        holder_balance: u64,
    ) -> Result<SellQuota> {
        require!(
            self.window_phase(now) == WindowPhase::InWindow,
            LaunchError::NotInTradingWindow
        );
        require!(amount > 0, LaunchError::InvalidParams);

        let user_total = check_user_sell(record.sold_on(self.current_day), amount, PER_USER_SELL_CAP)?;
        let day_total = check_day_sell(self.day_sold_total, amount, DAY_SELL_CAP)?;
        require!(holder_balance >= amount, LaunchError::InsufficientTokens);

        Ok(SellQuota { user_total, day_total })
    }

    pub fn commit_sell(&mut self, record: &mut UserRecord, seller: Pubkey, quota: SellQuota) {
        if record.user == Pubkey::default() {
            record.user = seller;
        }
        record.window_day = self.current_day;
        record.sold_this_window = quota.user_total;
        self.day_sold_total = quota.day_total;
    }
}

#[account]
pub struct UserRecord {
    pub user: Pubkey,
    pub window_day: u64,        // launch day the quota below belongs to
    pub sold_this_window: u64,
}

impl UserRecord {
    pub const SEED_PREFIX: &'static str = "user";

    // Discriminator (8) + user (32) + window_day (8) + sold_this_window (8)
    pub const ACCOUNT_SIZE: usize = 8 + 32 + 8 + 8;

    /// Tokens sold on `day`; a record stamped with an older day counts as empty.
    pub fn sold_on(&self, day: u64) -> u64 {
        if self.window_day == day {
            self.sold_this_window
        } else {
            0
        }
    }
}

/// Ledger operations the launch PDA signs for.
pub trait LaunchAccount<'info> {
    fn mint_to_vault(
        &self,
        mint: &Account<'info, Mint>,
        vault: &Account<'info, TokenAccount>,
        amount: u64,
        token_program: &Program<'info, Token>,
    ) -> Result<()>;

    // Mint authority -> None; supply is fixed afterwards
    fn disable_minting(
        &self,
        mint: &Account<'info, Mint>,
        token_program: &Program<'info, Token>,
    ) -> Result<()>;

    fn revoke_freeze_authority(
        &self,
        mint: &Account<'info, Mint>,
        token_program: &Program<'info, Token>,
    ) -> Result<()>;

    fn transfer_token_from_vault(
        &self,
        vault: &Account<'info, TokenAccount>,
        to: &Account<'info, TokenAccount>,
        mint: &Account<'info, Mint>,
        amount: u64,
        token_program: &Program<'info, Token>,
    ) -> Result<()>;

    fn transfer_token_to_vault(
        &self,
        from: &Account<'info, TokenAccount>,
        vault: &Account<'info, TokenAccount>,
        mint: &Account<'info, Mint>,
        amount: u64,
        authority: &Signer<'info>,
        token_program: &Program<'info, Token>,
    ) -> Result<()>;

    fn transfer_sol_to_launch(
        &self,
        from: &Signer<'info>,
        amount: u64,
        system_program: &Program<'info, System>,
    ) -> Result<()>;

    fn transfer_sol_from_launch(&self, to: &Signer<'info>, amount: u64) -> Result<()>;

    /// Lamports held above the rent-exempt floor.
    fn withdrawable_lamports(&self) -> Result<u64>;
}

impl<'info> LaunchAccount<'info> for Account<'info, LaunchMetadata> {
    fn mint_to_vault(
        &self,
        mint: &Account<'info, Mint>,
        vault: &Account<'info, TokenAccount>,
        amount: u64,
        token_program: &Program<'info, Token>,
    ) -> Result<()> {
        let id_bytes = self.launch_id.to_le_bytes();
        let seeds = &[
            LaunchMetadata::SEED_PREFIX.as_bytes(),
            id_bytes.as_ref(),
            &[self.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        token::mint_to(
            CpiContext::new_with_signer(
                token_program.to_account_info(),
                token::MintTo {
                    mint: mint.to_account_info(),
                    to: vault.to_account_info(),
                    authority: self.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )
    }

    fn disable_minting(
        &self,
        mint: &Account<'info, Mint>,
        token_program: &Program<'info, Token>,
    ) -> Result<()> {
        let id_bytes = self.launch_id.to_le_bytes();
        let seeds = &[
            LaunchMetadata::SEED_PREFIX.as_bytes(),
            id_bytes.as_ref(),
            &[self.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        token::set_authority(
            CpiContext::new_with_signer(
                token_program.to_account_info(),
                token::SetAuthority {
                    current_authority: self.to_account_info(),
                    account_or_mint: mint.to_account_info(),
                },
                signer_seeds,
            ),
            AuthorityType::MintTokens,
            None,
        )
    }

    fn revoke_freeze_authority(
        &self,
        mint: &Account<'info, Mint>,
        token_program: &Program<'info, Token>,
    ) -> Result<()> {
        let id_bytes = self.launch_id.to_le_bytes();
        let seeds = &[
            LaunchMetadata::SEED_PREFIX.as_bytes(),
            id_bytes.as_ref(),
            &[self.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        token::set_authority(
            CpiContext::new_with_signer(
                token_program.to_account_info(),
                token::SetAuthority {
                    current_authority: self.to_account_info(),
                    account_or_mint: mint.to_account_info(),
                },
                signer_seeds,
            ),
            AuthorityType::FreezeAccount,
            None,
        )
    }

    fn transfer_token_from_vault(
        &self,
        vault: &Account<'info, TokenAccount>,
        to: &Account<'info, TokenAccount>,
        mint: &Account<'info, Mint>,
        amount: u64,
        token_program: &Program<'info, Token>,
    ) -> Result<()> {
        let id_bytes = self.launch_id.to_le_bytes();
        let seeds = &[
            LaunchMetadata::SEED_PREFIX.as_bytes(),
            id_bytes.as_ref(),
            &[self.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        token::transfer_checked(
            CpiContext::new_with_signer(
                token_program.to_account_info(),
                token::TransferChecked {
                    from: vault.to_account_info(),
                    mint: mint.to_account_info(),
                    to: to.to_account_info(),
                    authority: self.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
            mint.decimals,
        )
    }

    fn transfer_token_to_vault(
        &self,
        from: &Account<'info, TokenAccount>,
        vault: &Account<'info, TokenAccount>,
        mint: &Account<'info, Mint>,
        amount: u64,
        authority: &Signer<'info>,
        token_program: &Program<'info, Token>,
    ) -> Result<()> {
        token::transfer_checked(
            CpiContext::new(
                token_program.to_account_info(),
                token::TransferChecked {
                    from: from.to_account_info(),
                    mint: mint.to_account_info(),
                    to: vault.to_account_info(),
                    authority: authority.to_account_info(),
                },
            ),
            amount,
            mint.decimals,
        )
    }

    fn transfer_sol_to_launch(
        &self,
        from: &Signer<'info>,
        amount: u64,
        system_program: &Program<'info, System>,
    ) -> Result<()> {
        system_program::transfer(
            CpiContext::new(
                system_program.to_account_info(),
                system_program::Transfer {
                    from: from.to_account_info(),
                    to: self.to_account_info(),
                },
            ),
            amount,
        )
    }

    // The launch PDA carries data, so the system program cannot debit it;
    // lamports are moved directly.
    fn transfer_sol_from_launch(&self, to: &Signer<'info>, amount: u64) -> Result<()> {
        self.sub_lamports(amount)?;
        to.add_lamports(amount)?;
        Ok(())
    }

    fn withdrawable_lamports(&self) -> Result<u64> {
        let info = self.to_account_info();
        let floor = Rent::get()?.minimum_balance(info.data_len());
        Ok(info.lamports().saturating_sub(floor))
    }
}
